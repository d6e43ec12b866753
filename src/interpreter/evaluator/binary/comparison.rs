use crate::{ast::BinaryOperator, interpreter::evaluator::core::Context, util::num::from_bool};

impl Context<'_> {
    /// Evaluates a comparison of the form `left <op> right`.
    ///
    /// The result is `1` when the comparison holds and `0` otherwise.
    ///
    /// # Example
    /// ```
    /// use intexpr::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_comparison(BinaryOperator::Less, 3, 5), 1);
    /// assert_eq!(Context::eval_comparison(BinaryOperator::NotEqual, 5, 5), 0);
    /// ```
    #[must_use]
    pub fn eval_comparison(op: BinaryOperator, left: i64, right: i64) -> i64 {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        from_bool(match op {
                      Equal => left == right,
                      NotEqual => left != right,
                      Less => left < right,
                      LessEqual => left <= right,
                      Greater => left > right,
                      GreaterEqual => left >= right,
                      _ => unreachable!("eval_comparison used with non comparison operator {op}"),
                  })
    }
}
