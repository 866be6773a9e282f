//! Infrastructure layer for external integrations.
//!
//! Implements interfaces defined by the domain layer, currently a single
//! SQLite-backed persistence module.

pub mod persistence;
