//! Lookup configuration module.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Lookup request configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Shortest accepted suggestion prefix, in letters
    pub min_prefix_len: usize,

    /// Longer prefixes are truncated to this many characters before validation
    pub max_prefix_len: usize,

    /// Sort suggestions lexicographically instead of keeping index order
    pub sort_suggestions: bool,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            min_prefix_len: 1,
            max_prefix_len: 20,
            sort_suggestions: false,
        }
    }
}

impl Validate for LookupConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.min_prefix_len == 0 {
            return Err(ConfigError::ValidationError(
                "min_prefix_len must be greater than 0".to_string(),
            ));
        }

        if self.max_prefix_len < self.min_prefix_len {
            return Err(ConfigError::ValueOutOfRange {
                key: "lookup.max_prefix_len".to_string(),
                message: format!(
                    "must be at least min_prefix_len ({}), got {}",
                    self.min_prefix_len, self.max_prefix_len
                ),
            });
        }

        Ok(())
    }
}
