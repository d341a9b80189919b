//! Plain, deserializable calculator configuration.

use crate::builder::error::BuildError;
use crate::core::DEFAULT_TAPE_CAPACITY;
use serde::{Deserialize, Serialize};

/// Calculator settings that can be loaded from JSON.
///
/// Missing fields take their defaults: a tape of `DEFAULT_TAPE_CAPACITY`
/// entries that records every dispatch.
///
/// # Example
///
/// ```rust
/// use calcpad::builder::CalculatorConfig;
///
/// let config = CalculatorConfig::from_json(r#"{"tape_capacity": 50}"#).unwrap();
/// assert_eq!(config.tape_capacity, Some(50));
/// assert!(config.record_tape);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Maximum tape length; `null` keeps every entry
    pub tape_capacity: Option<usize>,
    /// Whether dispatches are recorded at all
    pub record_tape: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            tape_capacity: Some(DEFAULT_TAPE_CAPACITY),
            record_tape: true,
        }
    }
}

impl CalculatorConfig {
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        serde_json::from_str(json).map_err(|e| BuildError::InvalidConfig(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = CalculatorConfig::from_json("{}").unwrap();
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn reads_all_fields() {
        let config =
            CalculatorConfig::from_json(r#"{"tape_capacity": 3, "record_tape": false}"#).unwrap();
        assert_eq!(config.tape_capacity, Some(3));
        assert!(!config.record_tape);
    }

    #[test]
    fn null_capacity_means_unbounded() {
        let config = CalculatorConfig::from_json(r#"{"tape_capacity": null}"#).unwrap();
        assert_eq!(config.tape_capacity, None);
        assert_eq!(
            CalculatorConfig::default().tape_capacity,
            Some(DEFAULT_TAPE_CAPACITY)
        );
    }

    #[test]
    fn rejects_unknown_fields() {
        let result = CalculatorConfig::from_json(r#"{"memory_registers": 4}"#);
        assert!(matches!(result, Err(BuildError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_malformed_json() {
        let result = CalculatorConfig::from_json("tape_capacity = 3");
        assert!(matches!(result, Err(BuildError::InvalidConfig(_))));
    }
}
