/// Infix operator evaluation logic.
///
/// Handles integer arithmetic and comparison, boolean equality, and the
/// `null` fallthrough for every other operand combination.
pub mod binary;

/// Prefix operator evaluation logic.
///
/// Implements logical NOT and arithmetic negation.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the evaluation machine: the work-list of pending frames, the
/// value stack and the halting rules for `return` and runtime errors.
pub mod core;
