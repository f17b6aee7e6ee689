// src/numerics/error.rs

//! Recoverable errors raised by the numerics kernel.
//!
//! Contract violations are not represented here; they are handled by the
//! validation mode in [`crate::numerics::config`].

/// Errors that can occur in numerics operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumericsError {
    #[error("cannot find inverse of singular matrix")]
    SingularMatrix,

    #[error("invalid validation mode '{0}': expected one of strict, warn, off")]
    InvalidValidationMode(String),
}
