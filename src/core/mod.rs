//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - The immutable `CalculatorState` and the `Event`s that transform it
//! - The total transition function `reduce`
//! - The binary evaluator and its number conversions
//! - Guard predicates and invariant checks
//! - Immutable tape tracking
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod evaluate;
mod event;
mod guard;
mod history;
mod invariants;
mod number;
mod reducer;
mod state;

pub use evaluate::{evaluate, evaluate_symbols};
pub use event::{Event, EventError, RawEvent};
pub use guard::{absorbing_guard, Guard, ADD_DIGIT_GUARDS};
pub use history::{Tape, TapeEntry, DEFAULT_TAPE_CAPACITY};
pub use invariants::{Field, Violation};
pub use number::{number_to_string, parse_float};
pub use reducer::reduce;
pub use state::{CalculatorState, Digit, Operation};
