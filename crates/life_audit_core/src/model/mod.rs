//! Life Audit domain model.
//!
//! # Responsibility
//! - Define plain serializable records for domains, goals, actions,
//!   check-ins, tasks, quick wins, reflections and score history.
//! - Keep the persisted JSON shape (camelCase wire fields) in one place.
//!
//! # Invariants
//! - Records hold no cyclic references; links are ids only.
//! - `LifeAuditState` is the unit of persistence.

pub mod action;
pub mod check_in;
pub mod domain;
pub mod goal;
pub mod id;
pub mod journal;
pub mod planning;
pub mod quick_win;
pub mod snapshot;
pub mod state;
pub mod task;
pub mod validation;
