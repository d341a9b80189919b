//! Calculator state and the values it is built from.
//!
//! The state is an immutable value: every transition produces a new
//! `CalculatorState` instead of mutating the previous one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A binary arithmetic operation chosen on the keypad.
///
/// Serialized as its keypad symbol (`"+"`, `"-"`, `"*"`, `"/"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operation {
    /// All operations, in keypad order.
    pub const ALL: [Operation; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// The keypad symbol for this operation.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Look up an operation by its keypad symbol.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calcpad::Operation;
    ///
    /// assert_eq!(Operation::from_symbol("*"), Some(Operation::Multiply));
    /// assert_eq!(Operation::from_symbol("%"), None);
    /// ```
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Apply the operation with `lhs` on the left.
    ///
    /// Plain IEEE-754 arithmetic: dividing by zero yields an infinity or NaN.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single keypad input character: `0`-`9` or the decimal point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digit(pub(crate) char);

impl Digit {
    pub const ZERO: Digit = Digit('0');
    pub const POINT: Digit = Digit('.');

    /// Accept `0`-`9` and `.`, reject everything else.
    pub fn new(c: char) -> Option<Self> {
        (c.is_ascii_digit() || c == '.').then_some(Self(c))
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The complete calculator state.
///
/// Empty strings mean "no input" for the operands; `None` means no
/// pending operation. `Default` is the zero state.
///
/// # Example
///
/// ```rust
/// use calcpad::{CalculatorState, Operation};
///
/// let state = CalculatorState::new("4", "3", Some(Operation::Add));
/// assert!(!state.is_zero());
/// assert!(CalculatorState::zero().is_zero());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorState {
    /// Operand currently being typed
    pub current_operand: String,
    /// Left-hand operand captured when an operation was chosen
    pub previous_operand: String,
    /// Pending operation, if any
    #[serde(with = "operation_symbol")]
    pub operation: Option<Operation>,
}

impl CalculatorState {
    pub fn new(
        current_operand: impl Into<String>,
        previous_operand: impl Into<String>,
        operation: Option<Operation>,
    ) -> Self {
        Self {
            current_operand: current_operand.into(),
            previous_operand: previous_operand.into(),
            operation,
        }
    }

    /// The state at startup and after `clear`.
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        self.current_operand.is_empty()
            && self.previous_operand.is_empty()
            && self.operation.is_none()
    }

    /// Symbol of the pending operation, or `""` when none is pending.
    pub fn operation_symbol(&self) -> &'static str {
        self.operation.map_or("", Operation::symbol)
    }
}

/// Operations travel as their symbol, with `""` for "none pending".
mod operation_symbol {
    use super::Operation;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        operation: &Option<Operation>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(operation.map_or("", Operation::symbol))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Operation>, D::Error> {
        let symbol = String::deserialize(deserializer)?;
        if symbol.is_empty() {
            return Ok(None);
        }
        Operation::from_symbol(&symbol)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("unknown operation `{symbol}`")))
    }
}
