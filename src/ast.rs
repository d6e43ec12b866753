use std::fmt;

/// An abstract syntax tree (AST) node representing an integer expression.
///
/// A node is exactly one of four shapes: a numeric literal, an identifier, a
/// unary operation owning a single operand, or a binary operation owning both
/// operands. The tree is built once by the parser and is never mutated
/// afterwards, so one tree can be evaluated any number of times against
/// different bindings, from any number of threads.
///
/// The [`Display`](fmt::Display) implementation renders the canonical, fully
/// parenthesized form of the tree:
///
/// ```
/// use intexpr::parse;
///
/// let expr = parse("x + y * -z").unwrap();
/// assert_eq!(expr.to_string(), "(x + (y * (-z)))");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A non-negative integer literal such as `42`.
    ///
    /// Unary minus is never part of a literal; `-42` is a [`Expr::Unary`]
    /// node wrapping `42`.
    Number(u64),
    /// Reference to a variable by name, resolved against the bindings at
    /// evaluation time.
    Identifier(String),
    /// A prefix operator applied to one operand.
    Unary {
        /// The operator to apply.
        op:      UnaryOperator,
        /// The operand.
        operand: Box<Self>,
    },
    /// An infix operator applied to two operands, evaluated left to right.
    Binary {
        /// Left-hand operand.
        left:  Box<Self>,
        /// The operator to apply.
        op:    BinaryOperator,
        /// Right-hand operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a unary node owning `operand`.
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: Self) -> Self {
        Self::Unary { op,
                      operand: Box::new(operand) }
    }

    /// Builds a binary node owning both operands.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::Binary { left: Box::new(left),
                       op,
                       right: Box::new(right) }
    }

    /// Returns the nesting depth of the tree; a leaf has depth 1.
    ///
    /// Evaluation recurses once per level, so this is also the stack depth
    /// an evaluation will reach.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Number(_) | Self::Identifier(_) => 1,
            Self::Unary { operand, .. } => 1 + operand.depth(),
            Self::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => f.write_str(name),
            Self::Unary { op, operand } => write!(f, "({op}{operand})"),
            Self::Binary { left, op, right } => write!(f, "({left} {op} {right})"),
        }
    }
}

/// Prefix operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `+x`, the identity.
    Plus,
    /// `-x`, arithmetic negation.
    Negate,
    /// `^x`, bitwise complement.
    BitNot,
    /// `!x`, logical negation: `1` if `x == 0`, otherwise `0`.
    Not,
}

impl UnaryOperator {
    /// Returns the source spelling of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::BitNot => "^",
            Self::Not => "!",
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Infix operators, from every precedence level.
///
/// Comparison and logical operators produce `1` for true and `0` for false;
/// there is no separate boolean type.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Rem,
    /// `&`
    BitAnd,
    /// `|`
    BitOr,
    /// `^`
    BitXor,
    /// `&^`, bit clear: `left & !right`.
    AndNot,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `&&`
    And,
    /// `||`
    Or,
}

impl BinaryOperator {
    /// Returns the source spelling of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::AndNot => "&^",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::And => "&&",
            Self::Or => "||",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
