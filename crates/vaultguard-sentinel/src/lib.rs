// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! URL risk scoring for the VaultGuard add-entry workflow.
//!
//! A URL is reduced to a fixed 7-feature vector by purely lexical analysis
//! and handed to a pluggable [`Scorer`]. The sentinel works without a
//! scorer: every URL then scores 0.0 and nothing is ever flagged.

pub mod features;
pub mod model;
pub mod risk;
pub mod scorer;

use std::path::Path;

use tracing::{debug, warn};
use vaultguard_core::Scorer;

pub use features::{KEYWORDS, extract_features};
pub use model::{load_scorer, parse_scorer};
pub use risk::{HIGH_RISK_THRESHOLD, MODERATE_RISK_THRESHOLD, RiskAssessment, RiskLevel};
pub use scorer::{Comparison, ConstantScorer, LogisticScorer, Rule, RuleScorer};

/// Feature extraction plus an optional scorer.
pub struct Sentinel {
    scorer: Option<Box<dyn Scorer>>,
}

impl std::fmt::Debug for Sentinel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sentinel")
            .field("scorer", &self.scorer.as_ref().map(|s| s.name()))
            .finish()
    }
}

impl Sentinel {
    pub fn new(scorer: Option<Box<dyn Scorer>>) -> Self {
        Self { scorer }
    }

    /// A sentinel that scores every URL as 0.0.
    pub fn without_scorer() -> Self {
        Self { scorer: None }
    }

    /// Load the scorer from `path`, degrading to no scorer if there is no
    /// path or the artifact cannot be loaded.
    pub fn from_model_path(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            debug!("no scorer model configured");
            return Self::without_scorer();
        };
        match load_scorer(path) {
            Ok(scorer) => Self::new(Some(scorer)),
            Err(e) => {
                warn!(error = %e, "scorer model unavailable, URL risk scoring disabled");
                Self::without_scorer()
            }
        }
    }

    pub fn has_scorer(&self) -> bool {
        self.scorer.is_some()
    }

    /// Score `url`. Never fails and never blocks on I/O.
    pub fn analyze_url(&self, url: &str) -> RiskAssessment {
        let features = extract_features(url);
        let probability = match &self.scorer {
            Some(scorer) => sanitize(scorer.name(), scorer.score(&features)),
            None => 0.0,
        };
        RiskAssessment::new(probability, features)
    }
}

impl Default for Sentinel {
    fn default() -> Self {
        Self::without_scorer()
    }
}

/// Clamp scorer output into `[0, 1]`; non-finite output becomes 0.0.
fn sanitize(scorer: &str, raw: f64) -> f64 {
    if !raw.is_finite() {
        warn!(scorer, "scorer returned a non-finite value, using 0.0");
        return 0.0;
    }
    if !(0.0..=1.0).contains(&raw) {
        warn!(scorer, raw, "scorer output out of range, clamping");
    }
    raw.clamp(0.0, 1.0)
}
