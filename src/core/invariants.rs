//! Invariant checks for calculator states.
//!
//! Validation collects every violation instead of stopping at the first,
//! so a caller sees everything wrong with a state in one pass.

use super::state::CalculatorState;
use std::fmt;
use thiserror::Error;

/// The operand field a violation was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    CurrentOperand,
    PreviousOperand,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CurrentOperand => f.write_str("currentOperand"),
            Self::PreviousOperand => f.write_str("previousOperand"),
        }
    }
}

/// A broken state invariant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Violation {
    #[error("{field} contains '{character}', operands hold only 0-9 and '.'")]
    ForeignCharacter { field: Field, character: char },

    #[error("{field} contains more than one decimal point")]
    MultiplePoints { field: Field },
}

impl CalculatorState {
    /// Check the operand invariants, accumulating ALL violations.
    ///
    /// Results such as `"-2"` or `"Infinity"` produced by evaluation are
    /// reported too; the transition function itself never rejects them.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calcpad::CalculatorState;
    ///
    /// assert!(CalculatorState::new("1.5", "2", None).validate().is_ok());
    ///
    /// let violations = CalculatorState::new("1.2.3", "-4", None)
    ///     .validate()
    ///     .unwrap_err();
    /// assert_eq!(violations.len(), 2);
    /// ```
    pub fn validate(&self) -> Result<(), Vec<Violation>> {
        let mut violations = Vec::new();
        check_operand(Field::CurrentOperand, &self.current_operand, &mut violations);
        check_operand(Field::PreviousOperand, &self.previous_operand, &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

fn check_operand(field: Field, operand: &str, violations: &mut Vec<Violation>) {
    let mut seen = Vec::new();
    for character in operand.chars() {
        if !(character.is_ascii_digit() || character == '.') && !seen.contains(&character) {
            seen.push(character);
            violations.push(Violation::ForeignCharacter { field, character });
        }
    }

    if operand.matches('.').count() > 1 {
        violations.push(Violation::MultiplePoints { field });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;

    #[test]
    fn zero_state_is_valid() {
        assert!(CalculatorState::zero().validate().is_ok());
    }

    #[test]
    fn typed_operands_are_valid() {
        let state = CalculatorState::new(".5", "1234.", Some(Operation::Add));
        assert!(state.validate().is_ok());
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let state = CalculatorState::new("1..2", "Inf", None);
        let violations = state.validate().unwrap_err();

        assert_eq!(
            violations,
            vec![
                Violation::MultiplePoints {
                    field: Field::CurrentOperand
                },
                Violation::ForeignCharacter {
                    field: Field::PreviousOperand,
                    character: 'I'
                },
                Violation::ForeignCharacter {
                    field: Field::PreviousOperand,
                    character: 'n'
                },
                Violation::ForeignCharacter {
                    field: Field::PreviousOperand,
                    character: 'f'
                },
            ]
        );
    }

    #[test]
    fn repeated_foreign_characters_are_reported_once() {
        let violations = CalculatorState::new("--1", "", None).validate().unwrap_err();
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn violation_messages_name_the_field() {
        let violation = Violation::MultiplePoints {
            field: Field::PreviousOperand,
        };
        assert_eq!(
            violation.to_string(),
            "previousOperand contains more than one decimal point"
        );
    }
}
