//! Core domain logic for Life Audit.
//! This crate is the single source of truth for assessment, progress and
//! persistence rules; presentation layers only call into it.

pub mod analytics;
pub mod assessment;
pub mod clock;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use assessment::onboarding::{
    AdvanceTicket, OnboardingFlow, OnboardingPhase, OnboardingResult, AUTO_ADVANCE_DELAY,
};
pub use assessment::AssessmentError;
pub use clock::{Clock, FixedClock, SystemClock};
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingStatus};
pub use model::domain::{LifeDomain, WheelDomain};
pub use model::state::LifeAuditState;
pub use model::validation::ModelValidationError;
pub use repo::backup::{BackupError, BackupFile, ImportOutcome, ImportStatus};
pub use repo::gateway::PersistenceGateway;
pub use repo::state_storage::{
    MemoryStateStorage, SqliteStateStorage, StateStorage, StorageError, StorageResult,
    STORAGE_KEY,
};
pub use service::audit_service::{AuditResult, AuditService, AuditServiceError};
