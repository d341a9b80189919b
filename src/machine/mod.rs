//! The imperative shell around the pure core.
//!
//! `Calculator` owns the one mutable value in the system, the current
//! state, and swaps it for the output of `reduce` on every event. Logging
//! and tape timestamps live here so the core stays pure.

mod calculator;

pub use calculator::Calculator;
