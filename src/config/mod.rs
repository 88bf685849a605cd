//! Application configuration and constants.
//!
//! This module provides:
//! - Schema identifier and widget tag constants
//! - Traversal limits and the rich-text allowlist
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ConfigValidationError, LogFormat, LogLevel, Opt};
