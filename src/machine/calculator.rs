//! Calculator driver that owns the state and dispatches events.

use crate::core::{
    absorbing_guard, parse_float, reduce, CalculatorState, Event, Tape, TapeEntry,
    DEFAULT_TAPE_CAPACITY,
};
use crate::display::Screen;
use crate::keypad::Key;
use chrono::Utc;
use tracing::{debug, trace, warn};

/// Owner of the single calculator state.
///
/// Every dispatch replaces the state wholesale with the output of the pure
/// transition function and, unless disabled, records the step on the tape.
///
/// # Example
///
/// ```rust
/// use calcpad::keypad::Key;
/// use calcpad::Calculator;
///
/// let mut calculator = Calculator::new();
/// for label in ["1", "2", "3", "4", "*", "2", "="] {
///     calculator.press(Key::from_label(label).unwrap());
/// }
///
/// assert_eq!(calculator.state().current_operand, "2468");
/// assert_eq!(calculator.screen().current, "2,468");
/// ```
#[derive(Clone, Debug)]
pub struct Calculator {
    state: CalculatorState,
    tape: Tape,
    record_tape: bool,
}

impl Calculator {
    /// Create a calculator in the zero state with a tape of
    /// `DEFAULT_TAPE_CAPACITY` entries.
    pub fn new() -> Self {
        Self::from_parts(
            CalculatorState::zero(),
            Tape::bounded(DEFAULT_TAPE_CAPACITY),
            true,
        )
    }

    pub(crate) fn from_parts(state: CalculatorState, tape: Tape, record_tape: bool) -> Self {
        Self {
            state,
            tape,
            record_tape,
        }
    }

    /// Get current state (pure)
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Render the current state (pure)
    pub fn screen(&self) -> Screen {
        Screen::render(&self.state)
    }

    /// Get the tape of dispatched events (pure)
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Apply one event and return the new state.
    pub fn dispatch(&mut self, event: Event) -> &CalculatorState {
        let next = reduce(&self.state, &event);
        self.log_transition(&event, &next);

        if self.record_tape {
            self.tape.push(TapeEntry {
                event,
                before: self.state.clone(),
                after: next.clone(),
                timestamp: Utc::now(),
            });
        }

        self.state = next;
        &self.state
    }

    /// Dispatch the event bound to a keypad button.
    pub fn press(&mut self, key: Key) -> &CalculatorState {
        self.dispatch(key.event())
    }

    fn log_transition(&self, event: &Event, next: &CalculatorState) {
        if *next == self.state {
            match event {
                Event::AddDigit(digit) => {
                    if let Some(guard) = absorbing_guard(&self.state, *digit) {
                        trace!(guard = guard.name(), %digit, "Digit absorbed by guard");
                    }
                }
                _ => trace!(event = event.kind(), "Event left state unchanged"),
            }
            return;
        }

        debug!(
            event = event.kind(),
            current = %next.current_operand,
            previous = %next.previous_operand,
            operation = next.operation_symbol(),
            "State replaced"
        );

        let result = match event {
            Event::Evaluate => &next.current_operand,
            Event::ChooseOperation(_)
                if !self.state.current_operand.is_empty()
                    && !self.state.previous_operand.is_empty() =>
            {
                &next.previous_operand
            }
            _ => return,
        };

        if result.is_empty() {
            warn!(
                previous = %self.state.previous_operand,
                current = %self.state.current_operand,
                "Evaluation produced no result, operand is not numeric"
            );
        } else if !parse_float(result).is_finite() {
            warn!(%result, "Evaluation produced a non-finite value");
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Digit, Operation};

    fn press_all(calculator: &mut Calculator, labels: &[&str]) {
        for label in labels {
            let key = Key::from_label(label).unwrap();
            calculator.press(key);
        }
    }

    #[test]
    fn starts_in_zero_state() {
        let calculator = Calculator::new();
        assert!(calculator.state().is_zero());
        assert!(calculator.tape().is_empty());
    }

    #[test]
    fn dispatch_returns_new_state() {
        let mut calculator = Calculator::new();
        let state = calculator.dispatch(Event::AddDigit(Digit('8'))).clone();
        assert_eq!(state.current_operand, "8");
        assert_eq!(calculator.state(), &state);
    }

    #[test]
    fn keypad_session_evaluates() {
        let mut calculator = Calculator::new();
        press_all(&mut calculator, &["9", "-", "1", "2", "="]);

        assert_eq!(calculator.state(), &CalculatorState::new("-3", "", None));
        assert_eq!(calculator.screen().current, "-3");
    }

    #[test]
    fn tape_records_every_dispatch() {
        let mut calculator = Calculator::new();
        press_all(&mut calculator, &["0", "0", "+", "AC"]);

        let tape = calculator.tape();
        assert_eq!(tape.len(), 4);
        assert_eq!(tape.changes(), 3);
        assert_eq!(tape.entries()[2].event, Event::ChooseOperation(Operation::Add));
        assert_eq!(tape.states().last().copied(), Some(&CalculatorState::zero()));
    }

    #[test]
    fn default_tape_stays_bounded() {
        let mut calculator = Calculator::new();
        for _ in 0..DEFAULT_TAPE_CAPACITY * 4 {
            calculator.press(Key::Clear);
        }
        press_all(&mut calculator, &["4", "2"]);

        let tape = calculator.tape();
        assert_eq!(tape.len(), DEFAULT_TAPE_CAPACITY);
        assert_eq!(tape.capacity(), Some(DEFAULT_TAPE_CAPACITY));
        assert_eq!(
            tape.entries().back().map(|e| e.after.current_operand.as_str()),
            Some("42")
        );
    }

    #[test]
    fn tape_can_be_disabled() {
        let mut calculator = Calculator::from_parts(CalculatorState::zero(), Tape::new(), false);
        press_all(&mut calculator, &["4", "2"]);

        assert_eq!(calculator.state().current_operand, "42");
        assert!(calculator.tape().is_empty());
    }

    #[test]
    fn non_numeric_operand_is_stored_as_empty_result() {
        let mut calculator = Calculator::new();
        press_all(&mut calculator, &["3", "+", ".", "="]);

        assert_eq!(calculator.state(), &CalculatorState::zero());
    }

    #[test]
    fn pending_operation_shows_on_upper_line() {
        let mut calculator = Calculator::new();
        press_all(&mut calculator, &["1", "5", "0", "0", "/"]);

        let screen = calculator.screen();
        assert_eq!(screen.previous, "1,500 /");
        assert_eq!(screen.current, "");
    }
}
