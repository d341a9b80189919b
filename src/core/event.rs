//! Input events dispatched into the calculator.

use super::state::{Digit, Operation};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised when decoding an event from its wire form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventError {
    #[error("Unknown event type '{0}'")]
    UnknownKind(String),

    #[error("Invalid digit payload '{0}', expected one of 0-9 or '.'")]
    InvalidDigit(String),

    #[error("Unknown operation '{0}', expected one of + - * /")]
    UnknownOperation(String),
}

/// A request to transform the calculator state.
///
/// On the wire an event is `{"type": ..., "payload": ...}`; payloads of
/// `delete-digit`, `clear` and `evaluate` are ignored when decoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEvent", into = "RawEvent")]
pub enum Event {
    AddDigit(Digit),
    DeleteDigit,
    ChooseOperation(Operation),
    Clear,
    Evaluate,
}

impl Event {
    /// Decode an event from its type name and payload.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calcpad::{Event, Operation};
    ///
    /// let event = Event::decode("choose-operation", "+").unwrap();
    /// assert_eq!(event, Event::ChooseOperation(Operation::Add));
    /// assert_eq!(Event::decode("clear", "ignored").unwrap(), Event::Clear);
    /// assert!(Event::decode("add-digit", "x").is_err());
    /// ```
    pub fn decode(kind: &str, payload: &str) -> Result<Self, EventError> {
        match kind {
            "add-digit" => {
                let mut chars = payload.chars();
                match (chars.next().and_then(Digit::new), chars.next()) {
                    (Some(digit), None) => Ok(Self::AddDigit(digit)),
                    _ => Err(EventError::InvalidDigit(payload.to_string())),
                }
            }
            "delete-digit" => Ok(Self::DeleteDigit),
            "choose-operation" => Operation::from_symbol(payload)
                .map(Self::ChooseOperation)
                .ok_or_else(|| EventError::UnknownOperation(payload.to_string())),
            "clear" => Ok(Self::Clear),
            "evaluate" => Ok(Self::Evaluate),
            other => Err(EventError::UnknownKind(other.to_string())),
        }
    }

    /// Wire name of the event type.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AddDigit(_) => "add-digit",
            Self::DeleteDigit => "delete-digit",
            Self::ChooseOperation(_) => "choose-operation",
            Self::Clear => "clear",
            Self::Evaluate => "evaluate",
        }
    }

    /// Wire payload; empty for events that carry none.
    pub fn payload(&self) -> String {
        match self {
            Self::AddDigit(digit) => digit.to_string(),
            Self::ChooseOperation(op) => op.symbol().to_string(),
            Self::DeleteDigit | Self::Clear | Self::Evaluate => String::new(),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddDigit(digit) => write!(f, "{}({digit})", self.kind()),
            Self::ChooseOperation(op) => write!(f, "{}({op})", self.kind()),
            _ => f.write_str(self.kind()),
        }
    }
}

/// Untyped `{type, payload}` form of an event, as produced by input
/// collaborators.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub payload: String,
}

impl TryFrom<RawEvent> for Event {
    type Error = EventError;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        Event::decode(&raw.kind, &raw.payload)
    }
}

impl From<Event> for RawEvent {
    fn from(event: Event) -> Self {
        Self {
            kind: event.kind().to_string(),
            payload: event.payload(),
        }
    }
}
