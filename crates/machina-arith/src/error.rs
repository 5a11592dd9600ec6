//! Errors surfaced by the arithmetic layer.

use thiserror::Error;

/// An error from a word-sized or modular arithmetic operation.
///
/// Every fallible operation in this crate and in the polynomial engine
/// built on top of it fails fast with one of these categories; operands
/// are left in a well-defined state (unchanged or zero).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ArithError {
    /// Inversion of zero or division by a zero element.
    #[error("division by zero")]
    DivisionByZero,

    /// An overflow-checked word operation did not fit in 64 bits.
    #[error("arithmetic overflow in {0}")]
    Overflow(&'static str),

    /// A caller-side contract violation.
    #[error("precondition violation: {0}")]
    Precondition(&'static str),
}
