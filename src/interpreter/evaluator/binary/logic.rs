use crate::{
    ast::BinaryOperator,
    interpreter::evaluator::core::Context,
    util::num::{from_bool, is_truthy},
};

impl Context<'_> {
    /// Evaluates a logical operation between two integers.
    ///
    /// Any nonzero operand counts as true. Both operands have already been
    /// evaluated by the time this runs; there is no short-circuiting.
    #[must_use]
    pub fn eval_logic(op: BinaryOperator, left: i64, right: i64) -> i64 {
        match op {
            BinaryOperator::And => from_bool(is_truthy(left) && is_truthy(right)),
            BinaryOperator::Or => from_bool(is_truthy(left) || is_truthy(right)),
            _ => unreachable!("eval_logic used with non logical operator {op}"),
        }
    }
}
