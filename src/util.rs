/// Numeric parsing and formatting helpers.
///
/// Operands arrive as text and results leave as text. This module owns both
/// directions so the evaluator and the console agree on what counts as a
/// number and on how one is printed.
pub mod num;
