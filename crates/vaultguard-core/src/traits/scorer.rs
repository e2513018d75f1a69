// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pluggable phishing-probability scorer.

use crate::types::FeatureVector;

/// Maps a URL feature vector to a phishing probability.
///
/// Any implementation works: a trained model, a rule table, a constant.
/// Callers clamp the result into `[0, 1]` and treat non-finite output as 0.0.
pub trait Scorer: Send + Sync {
    /// Short identifier used in log output.
    fn name(&self) -> &str;

    fn score(&self, features: &FeatureVector) -> f64;
}
