/// Dispatch of binary operators to their category.
pub mod core;

/// Arithmetic, bitwise and shift operators.
pub mod scalar;

/// Equality and ordering comparisons.
pub mod comparison;

/// Logical AND and OR.
pub mod logic;
