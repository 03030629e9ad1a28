//! Observability infrastructure
//!
//! Tripscope logs through `tracing` with dotted event names
//! (`calendar_import.completed`) and structured fields. This module installs
//! the process-wide subscriber; libraries never do.

pub mod logging;

pub use logging::{build_filter, init_tracing};
