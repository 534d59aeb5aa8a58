//! Read-only derivations over the Life Audit aggregate.
//!
//! # Responsibility
//! - Compute dashboard numbers (averages, series, trends, stats, schedule).
//!
//! # Invariants
//! - Functions are pure: they take `today` explicitly and never mutate.

pub mod mood;
pub mod schedule;
pub mod scores;
pub mod series;
pub mod tasks;
pub mod today;
