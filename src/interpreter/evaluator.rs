/// Binary operator evaluation logic.
///
/// Handles arithmetic, bitwise, shift, comparison and logical operators once
/// both operands have been evaluated.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements identity, arithmetic negation, bitwise complement and logical
/// NOT.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the evaluation context, the error mode policy and the recursive
/// walk over the tree.
pub mod core;

/// Variable lookup during evaluation.
pub mod bindings;
