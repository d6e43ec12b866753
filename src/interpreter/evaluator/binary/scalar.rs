use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
    util::num::{shift_left, shift_right},
};

impl Context<'_> {
    /// Evaluates an arithmetic operation: `+`, `-`, `*`, `/` or `%`.
    ///
    /// All operations wrap on overflow. Division truncates toward zero and
    /// the remainder takes the sign of the dividend. A zero divisor is a
    /// [`RuntimeError::DivisionByZero`] or [`RuntimeError::ModuloByZero`],
    /// subject to the error mode.
    ///
    /// # Example
    /// ```
    /// use intexpr::{ErrorMode, ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// let no_vars: [(&str, i64); 0] = [];
    /// let context = Context::new(&no_vars, ErrorMode::ReturnError);
    ///
    /// assert_eq!(context.eval_arithmetic(BinaryOperator::Div, -7, 2), Ok(-3));
    /// assert_eq!(context.eval_arithmetic(BinaryOperator::Rem, -7, 2), Ok(-1));
    /// assert_eq!(context.eval_arithmetic(BinaryOperator::Add, i64::MAX, 1), Ok(i64::MIN));
    /// ```
    pub fn eval_arithmetic(&self, op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
        use BinaryOperator::{Add, Div, Mul, Rem, Sub};

        match op {
            Add => Ok(left.wrapping_add(right)),
            Sub => Ok(left.wrapping_sub(right)),
            Mul => Ok(left.wrapping_mul(right)),
            Div => {
                if right == 0 {
                    return self.fail(RuntimeError::DivisionByZero);
                }
                Ok(left.wrapping_div(right))
            },
            Rem => {
                if right == 0 {
                    return self.fail(RuntimeError::ModuloByZero);
                }
                Ok(left.wrapping_rem(right))
            },
            _ => unreachable!("eval_arithmetic used with non arithmetic operator {op}"),
        }
    }

    /// Evaluates a bitwise operation: `&`, `|`, `^` or `&^`.
    ///
    /// `&^` clears in `left` every bit that is set in `right`.
    #[must_use]
    pub fn eval_bitwise(op: BinaryOperator, left: i64, right: i64) -> i64 {
        use BinaryOperator::{AndNot, BitAnd, BitOr, BitXor};

        match op {
            BitAnd => left & right,
            BitOr => left | right,
            BitXor => left ^ right,
            AndNot => left & !right,
            _ => unreachable!("eval_bitwise used with non bitwise operator {op}"),
        }
    }

    /// Evaluates a shift: `<<` or `>>`.
    ///
    /// A negative shift amount is an error subject to the error mode.
    /// Amounts of 64 or more shift every bit out: `<<` yields `0` and `>>`
    /// yields `0` or `-1` depending on the sign of `left`.
    pub fn eval_shift(&self, op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
        match op {
            BinaryOperator::Shl => match u64::try_from(right) {
                Ok(amount) => Ok(shift_left(left, amount)),
                Err(_) => self.fail(RuntimeError::NegativeLeftShift { amount: right }),
            },
            BinaryOperator::Shr => match u64::try_from(right) {
                Ok(amount) => Ok(shift_right(left, amount)),
                Err(_) => self.fail(RuntimeError::NegativeRightShift { amount: right }),
            },
            _ => unreachable!("eval_shift used with non shift operator {op}"),
        }
    }
}
