//! SQLite repository implementations.
//!
//! Concrete implementations of domain store traits using SQLx with
//! runtime-bound queries.

pub mod sqlite_mapping_store;

pub use sqlite_mapping_store::SqliteMappingStore;
