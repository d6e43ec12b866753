/// The evaluator module computes the value of an expression tree.
///
/// The evaluator walks the AST, looks variables up in the supplied bindings,
/// applies integer operators, and reports or masks runtime errors according
/// to the chosen error mode. It never mutates the tree.
///
/// # Responsibilities
/// - Evaluates every node shape: literals, identifiers, unary and binary
///   operations.
/// - Reports undefined variables, division and modulo by zero, and negative
///   shift amounts.
/// - Applies the `ReturnError` / `ReturnZero` policy at the point of failure.
pub mod evaluator;
/// The lexer module tokenizes source text on demand.
///
/// The lexer turns the raw source into tokens: integer literals,
/// identifiers, operators and parentheses. Tokens are pulled one at a time
/// by the parser through a [`lexer::TokenStream`].
///
/// # Responsibilities
/// - Recognizes one- and two-character operators, longest match first.
/// - Skips whitespace between tokens.
/// - Tracks byte offsets so errors can quote the remaining input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one function per precedence level.
///
/// # Responsibilities
/// - Encodes operator precedence and left associativity in the tree shape.
/// - Rejects malformed input with a message quoting where parsing stopped.
pub mod parser;
