//! Configuration for a sweep.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SweepError};

/// Default age, in whole days, at which a file becomes eligible for deletion.
pub const DEFAULT_MAX_AGE_DAYS: u32 = 90;

/// Retention policy and traversal options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SweepConfig {
    /// Files at least this many whole days old are deleted.
    #[serde(default = "default_max_age_days")]
    pub max_age_days: u32,

    /// The "now" ages are measured against.
    #[serde(default = "Utc::now")]
    pub reference: DateTime<Utc>,

    /// Descend into subdirectories. When off, subdirectories are retained untouched.
    #[serde(default)]
    pub recursive: bool,

    /// Allow directories to be deleted once empty or fully deletable.
    #[serde(default)]
    pub delete_empty_directories: bool,
}

fn default_max_age_days() -> u32 {
    DEFAULT_MAX_AGE_DAYS
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            max_age_days: DEFAULT_MAX_AGE_DAYS,
            reference: Utc::now(),
            recursive: false,
            delete_empty_directories: false,
        }
    }
}

impl SweepConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| SweepError::InvalidConfig(e.to_string()))
    }

    /// Whether a file of the given age (in whole days) is eligible for deletion.
    pub fn is_expired(&self, age_days: i64) -> bool {
        i64::from(self.max_age_days) <= age_days
    }
}
