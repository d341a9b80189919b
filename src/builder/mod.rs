//! Builder API for configuring calculators.
//!
//! The fluent builder validates the initial state and tape settings before
//! handing out a `Calculator`; `CalculatorConfig` carries the same settings
//! in a form that can be loaded from JSON.

pub mod config;
pub mod error;
pub mod machine;

pub use config::CalculatorConfig;
pub use error::BuildError;
pub use machine::CalculatorBuilder;
