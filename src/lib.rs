//! Calcpad: a pure functional keypad calculator
//!
//! Calcpad follows the "pure core, imperative shell" philosophy. The core is
//! a total transition function over an immutable state; the shell owns the
//! single state value, logs, and records a tape of what happened.
//!
//! # Core Concepts
//!
//! - **State**: the operand being typed, the stored operand, and the
//!   pending operation
//! - **Events**: digit input, delete, operation choice, clear, evaluate
//! - **Reducer**: `(state, event) -> state`, never failing; nonsensical
//!   input leaves the state unchanged
//! - **Evaluation**: left-to-right, one pending operation at a time
//!
//! # Example
//!
//! ```rust
//! use calcpad::{Calculator, Event, Operation};
//!
//! let mut calculator = Calculator::new();
//! for event in [
//!     Event::decode("add-digit", "3").unwrap(),
//!     Event::ChooseOperation(Operation::Add),
//!     Event::decode("add-digit", "4").unwrap(),
//!     Event::ChooseOperation(Operation::Multiply),
//!     Event::decode("add-digit", "2").unwrap(),
//!     Event::Evaluate,
//! ] {
//!     calculator.dispatch(event);
//! }
//!
//! // (3 + 4) * 2, no operator precedence
//! assert_eq!(calculator.state().current_operand, "14");
//! ```

pub mod builder;
pub mod core;
pub mod display;
pub mod keypad;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, CalculatorBuilder, CalculatorConfig};
pub use self::core::{reduce, CalculatorState, Digit, Event, EventError, Operation};
pub use display::{format_operand, Screen};
pub use machine::Calculator;
