//! # Tripscope Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The `.ics` calendar feed adapter
//! - The JSON file backed coordinate cache
//! - Configuration loading (files and environment)
//! - Logging subscriber setup
//!
//! ## Architecture
//! - Implements traits defined in `tripscope-core`
//! - Depends on `tripscope-domain` and `tripscope-core`
//! - Contains all "impure" code (file I/O, process-wide logging)

pub mod config;
pub mod errors;
pub mod feed;
pub mod observability;
pub mod storage;

// Re-export commonly used items
pub use errors::InfraError;
pub use feed::IcsFeed;
pub use observability::init_tracing;
pub use storage::JsonCoordinateStore;
