//! # Design
//!
//! - Constant-message errors; context lives in fields, never in the message.
//! - Collaborator failures are carried untouched as the `source` so callers see
//!   exactly what the registrar or the runtime raised.

use std::error::Error as StdError;

use thiserror::Error;

/// Result type for configuration parsing and validation.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors produced while loading bootstrap configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The inline JSON document could not be parsed.
    #[error("bootstrap config parse failure")]
    Parse {
        /// Underlying serde error.
        source: serde_json::Error,
    },
    /// A field was present but did not satisfy its constraints.
    #[error("bootstrap config field invalid")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// Value supplied for the field.
        value: String,
        /// Constraint that the value violated.
        reason: &'static str,
    },
}

/// Failures surfaced by a bootstrap run.
///
/// `R` is the registrar's error type and `A` the application runtime's.
#[derive(Debug, Error)]
pub enum BootstrapError<R, A>
where
    R: StdError + 'static,
    A: StdError + 'static,
{
    /// The canvas element could not be registered; the runtime was not started.
    #[error("canvas element registration failed")]
    CanvasRegistration {
        /// Custom element tag that was being registered.
        tag: String,
        /// Error raised by the registrar.
        source: R,
    },
    /// The application runtime failed to start.
    #[error("application runtime failed to start")]
    Runtime {
        /// Identifier used to resolve the mount point.
        mount_id: String,
        /// Error raised by the runtime.
        source: A,
    },
}

impl<R, A> BootstrapError<R, A>
where
    R: StdError + 'static,
    A: StdError + 'static,
{
    /// Returns the runtime error when the failure came from the runtime.
    #[must_use]
    pub const fn runtime_error(&self) -> Option<&A> {
        match self {
            Self::Runtime { source, .. } => Some(source),
            Self::CanvasRegistration { .. } => None,
        }
    }
}
