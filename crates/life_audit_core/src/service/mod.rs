//! Store-level use-case services.
//!
//! # Responsibility
//! - Orchestrate model mutations and whole-aggregate persistence.
//! - Keep callers decoupled from storage and time sources.

pub mod audit_service;
