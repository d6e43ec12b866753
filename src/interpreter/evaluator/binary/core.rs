use crate::{
    ast::BinaryOperator,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Evaluates a binary operation between two already evaluated operands.
    ///
    /// This function routes the operation to the handler for its category:
    /// arithmetic operators to `eval_arithmetic`, bitwise operators to
    /// `eval_bitwise`, shifts to `eval_shift`, comparisons to
    /// `eval_comparison` and `&&`/`||` to `eval_logic`.
    ///
    /// Only arithmetic and shifts can fail. A failure goes through the
    /// context's error mode, so under `ReturnZero` the result is `Ok(0)`.
    ///
    /// # Example
    /// ```
    /// use intexpr::{
    ///     ErrorMode, RuntimeError,
    ///     ast::BinaryOperator,
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let no_vars: [(&str, i64); 0] = [];
    ///
    /// let strict = Context::new(&no_vars, ErrorMode::ReturnError);
    /// assert_eq!(strict.eval_binary(BinaryOperator::Add, 3, 4), Ok(7));
    /// assert_eq!(strict.eval_binary(BinaryOperator::Rem, 3, 0),
    ///            Err(RuntimeError::ModuloByZero));
    ///
    /// let lenient = Context::new(&no_vars, ErrorMode::ReturnZero);
    /// assert_eq!(lenient.eval_binary(BinaryOperator::Rem, 3, 0), Ok(0));
    /// ```
    pub fn eval_binary(&self, op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
        use BinaryOperator::{
            Add, And, AndNot, BitAnd, BitOr, BitXor, Div, Equal, Greater, GreaterEqual, Less,
            LessEqual, Mul, NotEqual, Or, Rem, Shl, Shr, Sub,
        };

        match op {
            Add | Sub | Mul | Div | Rem => self.eval_arithmetic(op, left, right),
            BitAnd | BitOr | BitXor | AndNot => Ok(Self::eval_bitwise(op, left, right)),
            Shl | Shr => self.eval_shift(op, left, right),
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => {
                Ok(Self::eval_comparison(op, left, right))
            },
            And | Or => Ok(Self::eval_logic(op, left, right)),
        }
    }
}
