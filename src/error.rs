//! Error taxonomy for the arbitrary-precision kernel.

use thiserror::Error;

/// Everything that can go wrong constructing, parsing, or operating on a
/// [`crate::Number`].
///
/// There are exactly four kinds: a malformed textual operand, a division by
/// zero, an attempt to store a digit below the precision floor, and an
/// attempt to grow digit storage past its internal cap.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed parse input, or a radix outside `[2, 27]` for formatting.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Division by zero.
    #[error("overflow: {0}")]
    Overflow(String),

    /// Attempt to extend digit storage below `min_exp`.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// Digit count would exceed the internal cap during low-end expansion.
    #[error("length limit exceeded: {0}")]
    LengthLimit(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
