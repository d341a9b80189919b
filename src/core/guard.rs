//! Guard predicates that absorb redundant digit input.
//!
//! Guards are pure boolean functions over the current state and the digit
//! being typed. When a guard rejects the input, `add-digit` leaves the state
//! unchanged.

use super::state::{CalculatorState, Digit};

/// A named, pure predicate that rejects a digit for a given state.
///
/// # Example
///
/// ```rust
/// use calcpad::core::{absorbing_guard, Digit};
/// use calcpad::CalculatorState;
///
/// let state = CalculatorState::new("0", "", None);
/// let guard = absorbing_guard(&state, Digit::ZERO).unwrap();
/// assert_eq!(guard.name(), "leading-zero");
/// ```
#[derive(Clone, Copy)]
pub struct Guard {
    name: &'static str,
    rejects: fn(&CalculatorState, Digit) -> bool,
}

impl Guard {
    pub const fn new(name: &'static str, rejects: fn(&CalculatorState, Digit) -> bool) -> Self {
        Self { name, rejects }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Check whether this guard allows `digit` to be appended.
    pub fn check(&self, state: &CalculatorState, digit: Digit) -> bool {
        !(self.rejects)(state, digit)
    }
}

impl std::fmt::Debug for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").field("name", &self.name).finish()
    }
}

/// A lone `0` is never followed by another `0`.
fn redundant_leading_zero(state: &CalculatorState, digit: Digit) -> bool {
    digit == Digit::ZERO && state.current_operand == "0"
}

/// An operand holds at most one decimal point.
fn second_point(state: &CalculatorState, digit: Digit) -> bool {
    digit == Digit::POINT && state.current_operand.contains('.')
}

/// Guards consulted by `add-digit`, in order.
pub static ADD_DIGIT_GUARDS: [Guard; 2] = [
    Guard::new("leading-zero", redundant_leading_zero),
    Guard::new("second-point", second_point),
];

/// The first guard that rejects `digit`, if any.
pub fn absorbing_guard(state: &CalculatorState, digit: Digit) -> Option<&'static Guard> {
    ADD_DIGIT_GUARDS
        .iter()
        .find(|guard| !guard.check(state, digit))
}
