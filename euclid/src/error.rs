//! This module defines some errors that
//! may occur during the execution of the library.

use std::fmt::Debug;

use thiserror::Error;

/// Errors that may occur.
#[derive(Error, Debug)]
pub enum EuclidError {
    /// Error that occurs when an operand that must be positive is zero.
    #[error("GCD operands must be positive, got ({lhs:?}, {rhs:?})!")]
    ZeroOperand {
        /// The first operand.
        lhs: Box<dyn Debug>,
        /// The second operand.
        rhs: Box<dyn Debug>,
    },
    /// Error that occurs when the first operand of the modulo variant is less than the second.
    #[error("The first operand should not be less than the second: {lhs:?} < {rhs:?}")]
    OperandOrder {
        /// The first operand.
        lhs: Box<dyn Debug>,
        /// The second operand.
        rhs: Box<dyn Debug>,
    },
    /// Error that occurs when a wrap-around counter is given an empty range.
    #[error("The wrap-around range must not be zero")]
    ZeroRange,
}
