//! Typed error definitions.
//!
//! Request-level failures are not errors here: they are recorded as
//! [`crate::models::FailureReason`] values inside an account result.

mod config;
mod loader;

pub use config::ConfigError;
pub use loader::LoaderError;
