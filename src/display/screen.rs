//! The two-line calculator readout.

use super::format::format_operand;
use crate::core::CalculatorState;
use serde::Serialize;
use std::fmt;

/// Rendered readout for a state.
///
/// The upper line shows the stored operand followed by the pending
/// operation; the lower line shows the operand being typed.
///
/// # Example
///
/// ```rust
/// use calcpad::display::Screen;
/// use calcpad::{CalculatorState, Operation};
///
/// let state = CalculatorState::new("56", "1234", Some(Operation::Multiply));
/// let screen = Screen::render(&state);
/// assert_eq!(screen.previous, "1,234 *");
/// assert_eq!(screen.current, "56");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Screen {
    pub previous: String,
    pub current: String,
}

impl Screen {
    pub fn render(state: &CalculatorState) -> Self {
        let previous = format_operand(&state.previous_operand).unwrap_or_default();
        Self {
            previous: format!("{previous} {}", state.operation_symbol()),
            current: format_operand(&state.current_operand).unwrap_or_default(),
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.previous)?;
        write!(f, "{}", self.current)
    }
}
