//! Confidence band and provenance

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Closed interval `[low, high]` within `[0, 1]` that confidence values are
/// drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBand")]
pub struct ConfidenceBand {
    low: f64,
    high: f64,
}

#[derive(Deserialize)]
struct RawBand {
    low: f64,
    high: f64,
}

impl TryFrom<RawBand> for ConfidenceBand {
    type Error = DomainError;

    fn try_from(raw: RawBand) -> Result<Self, Self::Error> {
        ConfidenceBand::new(raw.low, raw.high)
    }
}

impl ConfidenceBand {
    /// Band used by the keyword-based mock resolver
    pub const RULE_BASED: ConfidenceBand = ConfidenceBand {
        low: 0.78,
        high: 0.95,
    };

    /// Band used when a model answered but reported no score
    pub const MODEL_BACKED: ConfidenceBand = ConfidenceBand {
        low: 0.75,
        high: 0.95,
    };

    pub fn new(low: f64, high: f64) -> Result<Self, DomainError> {
        let in_unit = |v: f64| (0.0..=1.0).contains(&v);
        if in_unit(low) && in_unit(high) && low <= high {
            Ok(Self { low, high })
        } else {
            Err(DomainError::InvalidConfidenceBand { low, high })
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Map a unit sample `u ∈ [0, 1]` linearly onto the band.
    ///
    /// Out-of-range samples are clamped, so the result is always inside.
    pub fn sample(&self, unit: f64) -> f64 {
        let unit = if unit.is_nan() { 0.0 } else { unit.clamp(0.0, 1.0) };
        (self.low + unit * (self.high - self.low)).clamp(self.low, self.high)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.low..=self.high).contains(&value)
    }
}

/// Where a confidence value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceSource {
    /// Drawn at random from a [`ConfidenceBand`]; carries no information
    Decorative,
    /// Reported by the inference provider
    Model,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(ConfidenceBand::RULE_BASED.low(), 0.78);
        assert_eq!(ConfidenceBand::RULE_BASED.high(), 0.95);
        assert_eq!(ConfidenceBand::MODEL_BACKED.low(), 0.75);
        assert_eq!(ConfidenceBand::MODEL_BACKED.high(), 0.95);
    }

    #[test]
    fn test_new_rejects_inverted_and_out_of_range() {
        assert!(ConfidenceBand::new(0.9, 0.1).is_err());
        assert!(ConfidenceBand::new(-0.1, 0.5).is_err());
        assert!(ConfidenceBand::new(0.5, 1.5).is_err());
        assert!(ConfidenceBand::new(f64::NAN, 0.5).is_err());
        assert!(ConfidenceBand::new(0.5, 0.5).is_ok());
    }

    #[test]
    fn test_sample_endpoints_and_clamping() {
        let band = ConfidenceBand::RULE_BASED;
        assert_eq!(band.sample(0.0), 0.78);
        assert!((band.sample(1.0) - 0.95).abs() < 1e-12);
        assert_eq!(band.sample(-3.0), 0.78);
        assert!((band.sample(7.0) - 0.95).abs() < 1e-12);
        assert_eq!(band.sample(f64::NAN), 0.78);
        assert!(band.contains(band.sample(0.5)));
    }

    #[test]
    fn test_deserialize_validates() {
        let band: ConfidenceBand = serde_json::from_str(r#"{"low":0.1,"high":0.2}"#).unwrap();
        assert_eq!(band.low(), 0.1);
        assert!(serde_json::from_str::<ConfidenceBand>(r#"{"low":0.8,"high":0.2}"#).is_err());
    }
}
