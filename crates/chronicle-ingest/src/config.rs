//! Configuration for corpus ingestion

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Configuration for the ingestion stage
///
/// Controls the timestamp validity window. Dates resolving outside
/// `[min_valid_year-01-01, cutoff)` are treated as absent, not as errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Earliest calendar year considered a valid document date (inclusive)
    pub min_valid_year: i32,

    /// First date no longer considered valid (exclusive upper bound)
    pub cutoff: NaiveDate,
}

impl IngestConfig {
    /// Whether a resolved date falls inside the validity window
    pub fn date_in_range(&self, date: NaiveDate) -> bool {
        use chrono::Datelike;
        date.year() >= self.min_valid_year && date < self.cutoff
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        use chrono::Datelike;
        if self.cutoff.year() < self.min_valid_year {
            return Err(format!(
                "cutoff {} predates min_valid_year {}",
                self.cutoff, self.min_valid_year
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for IngestConfig {
    /// Valid window: year 2000 through 2025-11-30
    fn default() -> Self {
        Self {
            min_valid_year: 2000,
            cutoff: NaiveDate::from_ymd_opt(2025, 12, 1).expect("static date"),
        }
    }
}
