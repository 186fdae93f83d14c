//! Configuration for graph construction

use chronicle_domain::MAX_RELATED;
use serde::{Deserialize, Serialize};

/// Configuration for the similarity engine and relationship selector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Minimum Jaccard similarity for a pair to become an edge (inclusive)
    pub threshold: f64,

    /// Maximum entries in each previous/next list
    pub max_related: usize,

    /// Minimum shared keywords before a candidate pair is scored
    pub min_shared_keywords: usize,
}

impl GraphConfig {
    /// Validate the configuration; called before any processing begins
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(format!(
                "threshold must be in [0, 1], got {}",
                self.threshold
            ));
        }
        if self.max_related == 0 {
            return Err("max_related must be greater than 0".to_string());
        }
        if self.min_shared_keywords == 0 {
            return Err("min_shared_keywords must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Override the similarity threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
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

impl Default for GraphConfig {
    /// 50% overlap threshold, up to 3 related documents per direction
    fn default() -> Self {
        Self {
            threshold: 0.5,
            max_related: MAX_RELATED,
            min_shared_keywords: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GraphConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.threshold, 0.5);
        assert_eq!(config.max_related, 3);
    }

    #[test]
    fn test_threshold_out_of_range() {
        assert!(GraphConfig::default().with_threshold(1.5).validate().is_err());
        assert!(GraphConfig::default().with_threshold(-0.1).validate().is_err());
        assert!(GraphConfig::default().with_threshold(0.0).validate().is_ok());
        assert!(GraphConfig::default().with_threshold(1.0).validate().is_ok());
    }

    #[test]
    fn test_zero_max_related_rejected() {
        let config = GraphConfig {
            max_related: 0,
            ..GraphConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = GraphConfig::default().with_threshold(0.35);
        let toml_str = config.to_toml().unwrap();
        let parsed = GraphConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.threshold, parsed.threshold);
        assert_eq!(config.max_related, parsed.max_related);
        assert_eq!(config.min_shared_keywords, parsed.min_shared_keywords);
    }
}
