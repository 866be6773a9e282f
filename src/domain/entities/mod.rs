//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation uses
//! a separate struct ([`NewUrlRecord`]) so the store controls the initial
//! visit count.

pub mod url_record;

pub use url_record::{NewUrlRecord, UrlRecord};
