// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Risk policy applied to scorer output.

use serde::Serialize;
use vaultguard_core::FeatureVector;

/// Probabilities at or above this take the high-risk path.
pub const HIGH_RISK_THRESHOLD: f64 = 0.70;

/// Probabilities at or above this (and below [`HIGH_RISK_THRESHOLD`]) get an
/// advisory warning.
pub const MODERATE_RISK_THRESHOLD: f64 = 0.35;

/// What the add-entry workflow should do with a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RiskLevel {
    /// Ask for explicit confirmation; discarding is the default.
    High,
    /// Print an advisory, then continue.
    Moderate,
    /// Continue silently.
    Low,
}

impl RiskLevel {
    pub fn from_probability(probability: f64) -> Self {
        if probability >= HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else if probability >= MODERATE_RISK_THRESHOLD {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }
}

/// Result of analyzing one URL.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskAssessment {
    /// Phishing probability in `[0, 1]`.
    pub probability: f64,
    pub level: RiskLevel,
    pub features: FeatureVector,
}

impl RiskAssessment {
    pub fn new(probability: f64, features: FeatureVector) -> Self {
        Self {
            probability,
            level: RiskLevel::from_probability(probability),
            features,
        }
    }

    /// Probability as a percentage, e.g. `"73.4%"`.
    pub fn percent(&self) -> String {
        format!("{:.1}%", self.probability * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_boundaries() {
        assert_eq!(RiskLevel::from_probability(1.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_probability(0.70), RiskLevel::High);
        assert_eq!(RiskLevel::from_probability(0.6999), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_probability(0.35), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_probability(0.3499), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(0.0), RiskLevel::Low);
    }

    #[test]
    fn percent_formatting() {
        let assessment = RiskAssessment::new(0.734, FeatureVector::zeros());
        assert_eq!(assessment.percent(), "73.4%");
        assert_eq!(RiskAssessment::new(0.0, FeatureVector::zeros()).percent(), "0.0%");
    }

    #[test]
    fn level_display() {
        assert_eq!(RiskLevel::High.to_string(), "high");
        assert_eq!(RiskLevel::Moderate.to_string(), "moderate");
    }
}
