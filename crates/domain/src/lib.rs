//! # Tripscope Domain
//!
//! Business domain types and models for Tripscope.
//!
//! This crate contains:
//! - Calendar input records and trip output records
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants and pure text helpers
//!
//! ## Architecture
//! - No dependencies on other Tripscope crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
