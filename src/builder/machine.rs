//! Builder for constructing calculators.

use crate::builder::config::CalculatorConfig;
use crate::builder::error::BuildError;
use crate::core::{CalculatorState, Tape, DEFAULT_TAPE_CAPACITY};
use crate::machine::Calculator;

/// Builder for constructing calculators with a fluent API.
pub struct CalculatorBuilder {
    initial: Option<CalculatorState>,
    tape_capacity: Option<usize>,
    record_tape: bool,
}

impl CalculatorBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            tape_capacity: Some(DEFAULT_TAPE_CAPACITY),
            record_tape: true,
        }
    }

    /// Set the initial state (defaults to the zero state).
    pub fn initial(mut self, state: CalculatorState) -> Self {
        self.initial = Some(state);
        self
    }

    /// Keep at most `capacity` tape entries (defaults to
    /// `DEFAULT_TAPE_CAPACITY`).
    pub fn tape_capacity(mut self, capacity: usize) -> Self {
        self.tape_capacity = Some(capacity);
        self
    }

    /// Keep every tape entry for the life of the calculator.
    pub fn unbounded_tape(mut self) -> Self {
        self.tape_capacity = None;
        self
    }

    /// Turn tape recording on or off.
    pub fn record_tape(mut self, record: bool) -> Self {
        self.record_tape = record;
        self
    }

    /// Apply settings from a loaded configuration.
    pub fn config(mut self, config: &CalculatorConfig) -> Self {
        self.tape_capacity = config.tape_capacity;
        self.record_tape = config.record_tape;
        self
    }

    /// Build the calculator.
    /// Returns an error if the initial state breaks an invariant or the
    /// tape capacity is zero.
    pub fn build(self) -> Result<Calculator, BuildError> {
        let initial = self.initial.unwrap_or_default();
        initial.validate().map_err(BuildError::InvalidInitialState)?;

        let tape = match self.tape_capacity {
            Some(0) => return Err(BuildError::ZeroTapeCapacity),
            Some(capacity) => Tape::bounded(capacity),
            None => Tape::new(),
        };

        Ok(Calculator::from_parts(initial, tape, self.record_tape))
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
