/// Represents all errors that can occur during evaluation.
///
/// Whether one of these reaches the caller depends on the
/// [`ErrorMode`](crate::interpreter::evaluator::core::ErrorMode) of the
/// evaluation: under `ReturnZero` the failing subexpression evaluates to `0`
/// instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Tried to use a variable that is not in the bindings.
    #[error("undefined variable {name}")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Attempted division by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Attempted remainder by zero.
    #[error("modulo by zero")]
    ModuloByZero,
    /// The right operand of `<<` was negative.
    #[error("negative left shift amount")]
    NegativeLeftShift {
        /// The shift amount found.
        amount: i64,
    },
    /// The right operand of `>>` was negative.
    #[error("negative right shift amount")]
    NegativeRightShift {
        /// The shift amount found.
        amount: i64,
    },
}
