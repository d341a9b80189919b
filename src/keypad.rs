//! Keypad buttons and the events they dispatch.

use crate::core::{Digit, Event, Operation};
use std::fmt;

/// One keypad button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// `AC`
    Clear,
    /// `DEL`
    Delete,
    Digit(Digit),
    Operation(Operation),
    /// `=`
    Evaluate,
}

impl Key {
    /// Text printed on the button.
    pub fn label(self) -> String {
        match self {
            Self::Clear => "AC".to_string(),
            Self::Delete => "DEL".to_string(),
            Self::Digit(digit) => digit.to_string(),
            Self::Operation(op) => op.symbol().to_string(),
            Self::Evaluate => "=".to_string(),
        }
    }

    /// Find the button with the given label.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calcpad::keypad::Key;
    /// use calcpad::Event;
    ///
    /// let key = Key::from_label("AC").unwrap();
    /// assert_eq!(key.event(), Event::Clear);
    /// assert!(Key::from_label("%").is_none());
    /// ```
    pub fn from_label(label: &str) -> Option<Self> {
        KEYPAD_LAYOUT.into_iter().find(|key| key.label() == label)
    }

    /// The event this button dispatches.
    pub fn event(self) -> Event {
        match self {
            Self::Clear => Event::Clear,
            Self::Delete => Event::DeleteDigit,
            Self::Digit(digit) => Event::AddDigit(digit),
            Self::Operation(op) => Event::ChooseOperation(op),
            Self::Evaluate => Event::Evaluate,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.label())
    }
}

const fn digit(c: char) -> Key {
    Key::Digit(Digit(c))
}

/// Buttons in row-major order:
///
/// ```text
/// AC      DEL /
/// 1   2   3   *
/// 4   5   6   +
/// 7   8   9   -
/// .   0   =
/// ```
pub const KEYPAD_LAYOUT: [Key; 18] = [
    Key::Clear,
    Key::Delete,
    Key::Operation(Operation::Divide),
    digit('1'),
    digit('2'),
    digit('3'),
    Key::Operation(Operation::Multiply),
    digit('4'),
    digit('5'),
    digit('6'),
    Key::Operation(Operation::Add),
    digit('7'),
    digit('8'),
    digit('9'),
    Key::Operation(Operation::Subtract),
    digit('.'),
    digit('0'),
    Key::Evaluate,
];
