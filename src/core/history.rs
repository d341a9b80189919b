//! Tape of dispatched events.
//!
//! Provides immutable tracking of calculator transitions over time,
//! following functional programming principles.

use super::event::Event;
use super::state::CalculatorState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Tape length kept when no capacity is configured.
pub const DEFAULT_TAPE_CAPACITY: usize = 256;

/// Record of a single dispatched event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TapeEntry {
    /// The event that was dispatched
    pub event: Event,
    /// State the event was applied to
    pub before: CalculatorState,
    /// State the event produced
    pub after: CalculatorState,
    /// When the event was dispatched
    pub timestamp: DateTime<Utc>,
}

impl TapeEntry {
    /// Whether the event changed the state (false for absorbed input).
    pub fn changed(&self) -> bool {
        self.before != self.after
    }
}

/// Ordered, optionally bounded tape of dispatched events.
///
/// `record` is pure and returns a new tape with the entry added; `push`
/// appends in place for the owner of a long-lived tape. A bounded tape
/// drops its oldest entries once full.
///
/// # Example
///
/// ```rust
/// use calcpad::core::{reduce, Tape, TapeEntry};
/// use calcpad::{CalculatorState, Event};
/// use chrono::Utc;
///
/// let before = CalculatorState::zero();
/// let event = Event::decode("add-digit", "5").unwrap();
/// let after = reduce(&before, &event);
///
/// let tape = Tape::new().record(TapeEntry {
///     event,
///     before,
///     after,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(tape.len(), 1);
/// assert_eq!(tape.states().len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tape {
    entries: VecDeque<TapeEntry>,
    capacity: Option<usize>,
}

impl Tape {
    /// Create an empty, unbounded tape.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tape that keeps at most `capacity` entries.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(DEFAULT_TAPE_CAPACITY)),
            capacity: Some(capacity),
        }
    }

    /// Record an entry, returning a new tape.
    ///
    /// This is a pure function - the existing tape is left untouched.
    pub fn record(&self, entry: TapeEntry) -> Self {
        let mut tape = self.clone();
        tape.push(entry);
        tape
    }

    /// Append an entry in place, evicting the oldest entries past capacity.
    pub fn push(&mut self, entry: TapeEntry) {
        self.entries.push_back(entry);
        if let Some(capacity) = self.capacity {
            while self.entries.len() > capacity {
                self.entries.pop_front();
            }
        }
    }

    /// The path of states: the first recorded `before` state, then the
    /// `after` state of every entry.
    pub fn states(&self) -> Vec<&CalculatorState> {
        let mut path = Vec::new();
        if let Some(first) = self.entries.front() {
            path.push(&first.before);
        }
        path.extend(self.entries.iter().map(|entry| &entry.after));
        path
    }

    /// Number of entries whose event changed the state.
    pub fn changes(&self) -> usize {
        self.entries.iter().filter(|entry| entry.changed()).count()
    }

    /// Time between the first and last recorded entries.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.entries.front()?, self.entries.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn entries(&self) -> &VecDeque<TapeEntry> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{reduce, Digit};

    fn entry(before: &CalculatorState, event: Event) -> TapeEntry {
        TapeEntry {
            event,
            before: before.clone(),
            after: reduce(before, &event),
            timestamp: Utc::now(),
        }
    }

    fn typed(tape: Tape, c: char) -> Tape {
        let before = tape
            .entries()
            .back()
            .map(|e| e.after.clone())
            .unwrap_or_default();
        tape.record(entry(&before, Event::AddDigit(Digit(c))))
    }

    #[test]
    fn new_tape_is_empty() {
        let tape = Tape::new();
        assert!(tape.is_empty());
        assert!(tape.states().is_empty());
        assert!(tape.duration().is_none());
        assert_eq!(tape.capacity(), None);
    }

    #[test]
    fn record_is_immutable() {
        let tape = Tape::new();
        let recorded = tape.record(entry(&CalculatorState::zero(), Event::Clear));

        assert_eq!(tape.len(), 0);
        assert_eq!(recorded.len(), 1);
    }

    #[test]
    fn states_follow_the_dispatch_order() {
        let tape = ['1', '2', '3'].into_iter().fold(Tape::new(), typed);

        let currents: Vec<&str> = tape
            .states()
            .iter()
            .map(|s| s.current_operand.as_str())
            .collect();
        assert_eq!(currents, vec!["", "1", "12", "123"]);
    }

    #[test]
    fn push_appends_in_place() {
        let mut tape = Tape::bounded(3);
        for _ in 0..10 {
            tape.push(entry(&CalculatorState::zero(), Event::Clear));
        }

        assert_eq!(tape.len(), 3);
        assert_eq!(tape.changes(), 0);
    }

    #[test]
    fn record_matches_push() {
        let recorded = ['7', '8'].into_iter().fold(Tape::bounded(1), typed);

        let mut pushed = Tape::bounded(1);
        for entry in recorded.entries() {
            pushed.push(entry.clone());
        }
        assert_eq!(pushed, recorded);
    }

    #[test]
    fn bounded_tape_drops_oldest_entries() {
        let tape = ['1', '2', '3', '4'].into_iter().fold(Tape::bounded(2), typed);

        assert_eq!(tape.len(), 2);
        assert_eq!(tape.entries()[0].after.current_operand, "123");
        assert_eq!(tape.entries()[1].after.current_operand, "1234");
        assert_eq!(tape.capacity(), Some(2));
    }

    #[test]
    fn changes_skip_absorbed_events() {
        let tape = ['0', '0', '.', '.'].into_iter().fold(Tape::new(), typed);

        assert_eq!(tape.len(), 4);
        assert_eq!(tape.changes(), 2);
        assert!(!tape.entries()[1].changed());
    }

    #[test]
    fn single_entry_has_zero_duration() {
        let tape = Tape::new().record(entry(&CalculatorState::zero(), Event::Evaluate));
        assert_eq!(tape.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn tape_serializes_correctly() {
        let tape = ['4', '2'].into_iter().fold(Tape::new(), typed);

        let json = serde_json::to_string(&tape).unwrap();
        let deserialized: Tape = serde_json::from_str(&json).unwrap();

        assert_eq!(tape, deserialized);
    }
}
