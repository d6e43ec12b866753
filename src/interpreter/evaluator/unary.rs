use crate::{
    ast::UnaryOperator,
    interpreter::evaluator::core::Context,
    util::num::from_bool,
};

impl Context<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Plus`: returns the value unchanged.
    /// - `Negate`: arithmetic negation, wrapping at `i64::MIN`.
    /// - `BitNot`: bitwise complement.
    /// - `Not`: `1` for zero, `0` for anything else.
    ///
    /// No unary operator can fail.
    ///
    /// # Example
    /// ```
    /// use intexpr::{ast::UnaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_unary(UnaryOperator::Negate, 5), -5);
    /// assert_eq!(Context::eval_unary(UnaryOperator::BitNot, 0), -1);
    /// assert_eq!(Context::eval_unary(UnaryOperator::Not, 3), 0);
    /// ```
    #[must_use]
    pub const fn eval_unary(op: UnaryOperator, value: i64) -> i64 {
        match op {
            UnaryOperator::Plus => value,
            UnaryOperator::Negate => value.wrapping_neg(),
            UnaryOperator::BitNot => !value,
            UnaryOperator::Not => from_bool(value == 0),
        }
    }
}
