//! The transition function: `(state, event) -> state`.
//!
//! `reduce` is total. Input that makes no sense for the current state is
//! absorbed by returning the state unchanged.

use super::evaluate::evaluate;
use super::event::Event;
use super::guard::absorbing_guard;
use super::state::{CalculatorState, Digit, Operation};

/// Produce the next state for `event`.
///
/// # Example
///
/// ```rust
/// use calcpad::core::reduce;
/// use calcpad::{CalculatorState, Event, Operation};
///
/// let events = [
///     Event::decode("add-digit", "3").unwrap(),
///     Event::ChooseOperation(Operation::Add),
///     Event::decode("add-digit", "4").unwrap(),
///     Event::Evaluate,
/// ];
///
/// let state = events
///     .iter()
///     .fold(CalculatorState::zero(), |state, event| reduce(&state, event));
/// assert_eq!(state.current_operand, "7");
/// ```
pub fn reduce(state: &CalculatorState, event: &Event) -> CalculatorState {
    match event {
        Event::AddDigit(digit) => add_digit(state, *digit),
        Event::Clear => CalculatorState::zero(),
        Event::DeleteDigit => delete_digit(state),
        Event::ChooseOperation(op) => choose_operation(state, *op),
        Event::Evaluate => evaluate_pending(state),
    }
}

fn add_digit(state: &CalculatorState, digit: Digit) -> CalculatorState {
    if absorbing_guard(state, digit).is_some() {
        return state.clone();
    }

    let mut current_operand = state.current_operand.clone();
    current_operand.push(digit.as_char());
    CalculatorState {
        current_operand,
        ..state.clone()
    }
}

fn delete_digit(state: &CalculatorState) -> CalculatorState {
    let mut current_operand = state.current_operand.clone();
    current_operand.pop();
    CalculatorState {
        current_operand,
        ..state.clone()
    }
}

fn choose_operation(state: &CalculatorState, op: Operation) -> CalculatorState {
    if state.current_operand.is_empty() {
        return CalculatorState {
            operation: Some(op),
            ..state.clone()
        };
    }

    // Left-to-right chaining: a pending pair is folded before the new
    // operation takes its place.
    let previous_operand = if state.previous_operand.is_empty() {
        state.current_operand.clone()
    } else {
        evaluate(state)
    };

    CalculatorState {
        current_operand: String::new(),
        previous_operand,
        operation: Some(op),
    }
}

fn evaluate_pending(state: &CalculatorState) -> CalculatorState {
    if state.current_operand.is_empty()
        || state.previous_operand.is_empty()
        || state.operation.is_none()
    {
        return state.clone();
    }

    CalculatorState {
        current_operand: evaluate(state),
        previous_operand: String::new(),
        operation: None,
    }
}
