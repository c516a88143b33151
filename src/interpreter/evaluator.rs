/// Operator handling for the evaluator.
///
/// Decides when a pending operator is dominated, pops operands, and computes
/// the arithmetic result.
pub mod binary;

/// Core evaluation loop and stack state.
///
/// Contains the [`core::Evaluator`] type, the per-token dispatch and the final
/// drain of the operator stack.
pub mod core;
