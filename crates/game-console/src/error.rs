//! Console errors.

use thiserror::Error;

/// Errors reported by the console's public accessors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    /// An argument was requested past the end of the pending arguments.
    #[error("argument index {index} out of range, {len} pending arguments")]
    ArgumentOutOfRange { index: usize, len: usize },
}
