//! Relevance tier module - categorical buckets over similarity ratios

use serde::{Deserialize, Serialize};

/// Relevance tier derived from a Jaccard similarity ratio
///
/// The visualizer surfaces three bands:
/// - SomewhatRelevant: [0.30, 0.50)
/// - Relevant: [0.50, 0.70)
/// - HighlyRelevant: [0.70, 1.0]
///
/// Below 0.30 there is no tier; such pairs are never listed. Under the
/// default 0.5 edge threshold the somewhat-relevant band is only reachable
/// when the threshold is lowered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelevanceTier {
    /// Similarity in [0.30, 0.50)
    SomewhatRelevant,

    /// Similarity in [0.50, 0.70)
    Relevant,

    /// Similarity in [0.70, 1.0]
    HighlyRelevant,
}

impl RelevanceTier {
    /// Lower bound of the somewhat-relevant band
    pub const SOMEWHAT_FLOOR: f64 = 0.30;
    /// Lower bound of the relevant band
    pub const RELEVANT_FLOOR: f64 = 0.50;
    /// Lower bound of the highly-relevant band
    pub const HIGHLY_FLOOR: f64 = 0.70;

    /// Classify a similarity ratio; `None` below the somewhat-relevant
    /// floor. Monotone non-decreasing in the input.
    pub fn from_similarity(similarity: f64) -> Option<Self> {
        if similarity >= Self::HIGHLY_FLOOR {
            Some(RelevanceTier::HighlyRelevant)
        } else if similarity >= Self::RELEVANT_FLOOR {
            Some(RelevanceTier::Relevant)
        } else if similarity >= Self::SOMEWHAT_FLOOR {
            Some(RelevanceTier::SomewhatRelevant)
        } else {
            None
        }
    }

    /// Get the tier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RelevanceTier::SomewhatRelevant => "somewhat_relevant",
            RelevanceTier::Relevant => "relevant",
            RelevanceTier::HighlyRelevant => "highly_relevant",
        }
    }

    /// Parse a tier from a string (internal use)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "somewhat_relevant" => Some(RelevanceTier::SomewhatRelevant),
            "relevant" => Some(RelevanceTier::Relevant),
            "highly_relevant" => Some(RelevanceTier::HighlyRelevant),
            _ => None,
        }
    }
}

impl std::str::FromStr for RelevanceTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid relevance tier: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries_are_inclusive_floors() {
        assert_eq!(RelevanceTier::from_similarity(0.29), None);
        assert_eq!(
            RelevanceTier::from_similarity(0.30),
            Some(RelevanceTier::SomewhatRelevant)
        );
        assert_eq!(
            RelevanceTier::from_similarity(0.50),
            Some(RelevanceTier::Relevant)
        );
        assert_eq!(
            RelevanceTier::from_similarity(0.70),
            Some(RelevanceTier::HighlyRelevant)
        );
        assert_eq!(
            RelevanceTier::from_similarity(1.0),
            Some(RelevanceTier::HighlyRelevant)
        );
    }

    #[test]
    fn test_spec_example_ratio_lands_in_somewhat() {
        // 3/7 ≈ 0.4286
        assert_eq!(
            RelevanceTier::from_similarity(3.0 / 7.0),
            Some(RelevanceTier::SomewhatRelevant)
        );
    }

    #[test]
    fn test_tier_ordering_matches_bands() {
        assert!(RelevanceTier::SomewhatRelevant < RelevanceTier::Relevant);
        assert!(RelevanceTier::Relevant < RelevanceTier::HighlyRelevant);
    }

    #[test]
    fn test_round_trip_strings() {
        for tier in [
            RelevanceTier::SomewhatRelevant,
            RelevanceTier::Relevant,
            RelevanceTier::HighlyRelevant,
        ] {
            assert_eq!(RelevanceTier::parse(tier.as_str()), Some(tier));
        }
        assert_eq!(RelevanceTier::parse("unknown"), None);
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&RelevanceTier::HighlyRelevant).unwrap();
        assert_eq!(json, "\"highly_relevant\"");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: tier assignment is monotone non-decreasing in similarity
        #[test]
        fn test_tier_monotonicity(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let t_lo = RelevanceTier::from_similarity(lo);
            let t_hi = RelevanceTier::from_similarity(hi);
            match (t_lo, t_hi) {
                (Some(l), Some(h)) => prop_assert!(l <= h),
                (Some(_), None) => prop_assert!(false, "higher similarity lost its tier"),
                _ => {}
            }
        }
    }
}
