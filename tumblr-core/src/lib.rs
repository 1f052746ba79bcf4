//! Tumblr Core - Foundation types, error handling, configuration, and logging.
//!
//! This crate provides the shared foundation used by the API client crate:
//! - Client configuration (account credentials, blog name, endpoint overrides)
//! - Global error types covering all error categories
//! - Structured logging with tracing
//! - Common constants

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;

// Re-export commonly used items at the crate root
pub use config::{ClientConfig, Credentials};
pub use error::{TumblrError, TumblrResult};
pub use logging::init_console_logging;
