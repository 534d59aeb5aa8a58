//! Persistence abstractions and implementations.
//!
//! # Responsibility
//! - Define the single-blob storage port and its backends.
//! - Convert between the aggregate, its stored JSON and `.lab` backups.
//!
//! # Invariants
//! - The aggregate is always read and written as a whole.
//! - Storage corruption degrades to defaults; it never raises.

pub mod backup;
pub mod gateway;
pub mod state_storage;
