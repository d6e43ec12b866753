/// Integer helpers shared by the evaluator.
///
/// Conversions between booleans and the `0`/`1` integers that stand in for
/// them, and shifts that stay defined for amounts of 64 and above.
pub mod num;
