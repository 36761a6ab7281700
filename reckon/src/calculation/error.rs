use thiserror::Error;

use super::Kind;

/// Errors that can occur when creating or evaluating a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The factory was given a type name outside the supported set.
    #[error("unsupported calculation type '{0}'")]
    UnsupportedType(String),

    /// An input value is not a number (NaN or infinite).
    #[error("inputs must be a list of numbers")]
    InvalidInput,

    /// Fewer inputs than the variant's minimum.
    #[error("{}", .0.insufficient_inputs_message())]
    InsufficientInputs(Kind),

    /// A divisor after the first input is zero.
    #[error("cannot divide by zero")]
    DivisionByZero,

    /// A modulus operand after the first input is zero.
    #[error("cannot take modulus with zero")]
    ModulusWithZero,

    /// A root degree of zero was supplied.
    #[error("cannot take root with degree zero")]
    RootDegreeZero,

    /// An even-degree root was applied to a negative accumulator.
    #[error("cannot take even root of negative number")]
    EvenRootOfNegative,
}
