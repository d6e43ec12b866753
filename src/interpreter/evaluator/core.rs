use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::bindings::Bindings,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How evaluation reacts to a runtime error such as division by zero or an
/// undefined variable.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorMode {
    /// Abort at the first error and return it.
    #[default]
    ReturnError,
    /// Replace the failing subexpression with `0` and keep evaluating.
    /// Evaluation in this mode always succeeds.
    ReturnZero,
}

/// Stores the state of one evaluation.
///
/// A `Context` pairs the variable bindings with the error mode. It holds no
/// mutable state, so one context can evaluate any number of trees.
#[derive(Clone, Copy)]
pub struct Context<'b> {
    bindings: &'b dyn Bindings,
    mode:     ErrorMode,
}

impl<'b> Context<'b> {
    /// Creates a context reading variables from `bindings`.
    #[must_use]
    pub fn new(bindings: &'b dyn Bindings, mode: ErrorMode) -> Self {
        Self { bindings, mode }
    }

    /// The error mode this context evaluates under.
    #[must_use]
    pub const fn mode(&self) -> ErrorMode {
        self.mode
    }

    /// Evaluates an expression and returns its value.
    ///
    /// Operands are always evaluated left before right, and both are always
    /// evaluated: `&&` and `||` do not short-circuit. Under
    /// [`ErrorMode::ReturnError`] the first error in that order is returned;
    /// under [`ErrorMode::ReturnZero`] errors never escape.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] only under [`ErrorMode::ReturnError`].
    pub fn eval(&self, expr: &Expr) -> EvalResult<i64> {
        match expr {
            Expr::Number(value) => Ok(value.cast_signed()),
            Expr::Identifier(name) => self.eval_identifier(name),
            Expr::Unary { op, operand } => {
                let value = self.eval(operand)?;
                Ok(Self::eval_unary(*op, value))
            },
            Expr::Binary { left, op, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                self.eval_binary(*op, left, right)
            },
        }
    }

    /// Looks up a variable in the bindings.
    fn eval_identifier(&self, name: &str) -> EvalResult<i64> {
        match self.bindings.get(name) {
            Some(value) => Ok(value),
            None => self.fail(RuntimeError::UndefinedVariable { name: name.to_string() }),
        }
    }

    /// Applies the error mode to a failed operation.
    ///
    /// Returns the error under `ReturnError` and `Ok(0)` under `ReturnZero`.
    pub(crate) fn fail(&self, error: RuntimeError) -> EvalResult<i64> {
        match self.mode {
            ErrorMode::ReturnError => Err(error),
            ErrorMode::ReturnZero => {
                tracing::debug!(%error, "substituting zero");
                Ok(0)
            },
        }
    }
}

impl Expr {
    /// Evaluates the expression against `bindings`.
    ///
    /// # Errors
    /// Under [`ErrorMode::ReturnError`], returns the first [`RuntimeError`]
    /// met in left-to-right order. Under [`ErrorMode::ReturnZero`] this never
    /// fails.
    ///
    /// # Examples
    /// ```
    /// use intexpr::{ErrorMode, RuntimeError, parse};
    ///
    /// let expr = parse("3 + x / 0").unwrap();
    ///
    /// assert_eq!(expr.eval(&[("x", 1_i64)], ErrorMode::ReturnError),
    ///            Err(RuntimeError::DivisionByZero));
    /// assert_eq!(expr.eval(&[("x", 1_i64)], ErrorMode::ReturnZero), Ok(3));
    /// ```
    #[tracing::instrument(level = "trace", skip(self, bindings), fields(expr = %self))]
    pub fn eval(&self, bindings: &dyn Bindings, mode: ErrorMode) -> EvalResult<i64> {
        Context::new(bindings, mode).eval(self)
    }
}
