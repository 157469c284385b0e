//! Common result and error types for the sqfvm toolchain.

/// The standard result type for fallible internal operations.
///
/// `Err` indicates an unrecoverable internal error (a bug in the toolchain),
/// not a user-facing problem. Problems in user scripts are reported as
/// diagnostics through an emitter and the operation still returns `Ok`.
pub type SqfResult<T> = Result<T, InternalError>;

/// An internal error indicating a bug in the toolchain, not a script problem.
#[derive(Debug, thiserror::Error)]
#[error("internal toolchain error: {message}")]
pub struct InternalError {
    /// Description of the internal error.
    pub message: String,
}

impl InternalError {
    /// Creates a new internal error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for InternalError {
    fn from(message: String) -> Self {
        Self { message }
    }
}
