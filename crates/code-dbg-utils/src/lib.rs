//! # code-dbg Utilities
//!
//! Shared utilities, logging, and path helpers for code-dbg.
//!
//! This crate provides common functionality used across the code-dbg workspace,
//! including the logging setup built on `tracing` that every binary installs
//! before doing any work.

pub mod logging;
pub mod paths;

// Re-export commonly used logging functions for convenience
pub use logging::{init_logging, init_logging_with_level, LogFormat, LogLevel, LoggingError, LoggingGuard};
pub use tracing::{debug, error, info, trace, warn};
