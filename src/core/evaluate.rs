//! Binary expression evaluation over operand text.

use super::number::{number_to_string, parse_float};
use super::state::{CalculatorState, Operation};

/// Evaluate `previous <operation> current` for a state.
///
/// Returns the result in its default decimal form, or an empty string when
/// either operand is not numeric. An empty result is not an error; callers
/// store it like any other operand.
///
/// # Example
///
/// ```rust
/// use calcpad::core::evaluate;
/// use calcpad::{CalculatorState, Operation};
///
/// let state = CalculatorState::new("4", "3", Some(Operation::Add));
/// assert_eq!(evaluate(&state), "7");
/// ```
pub fn evaluate(state: &CalculatorState) -> String {
    evaluate_symbols(
        &state.previous_operand,
        state.operation_symbol(),
        &state.current_operand,
    )
}

/// Evaluate raw operand text with an operation given by symbol.
///
/// An unrecognized symbol yields `"0"` when both operands are numeric.
pub fn evaluate_symbols(previous: &str, symbol: &str, current: &str) -> String {
    let lhs = parse_float(previous);
    let rhs = parse_float(current);

    if lhs.is_nan() || rhs.is_nan() {
        return String::new();
    }

    let result = Operation::from_symbol(symbol).map_or(0.0, |op| op.apply(lhs, rhs));
    number_to_string(result)
}
