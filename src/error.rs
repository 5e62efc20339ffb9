//! Error types for the wvswap library.
//!
//! All fallible operations return `Result<T, VarSwapError>` rather than panicking.
//! Out-of-domain numeric inputs (e.g. a negative variance under a square root)
//! are not errors: they propagate as NaN in the affected element only.

use thiserror::Error;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, VarSwapError>;

/// Errors that can occur while constructing instruments or evaluating them.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VarSwapError {
    /// A model parameter is out of range (e.g., non-positive kappa,
    /// correlation outside [-1, 1]).
    #[error("invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Observation vectors passed to one call are inconsistent
    /// (e.g., mismatched lengths).
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}
