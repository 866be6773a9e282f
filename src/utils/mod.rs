//! Shared utility functions.

pub mod token_generator;
