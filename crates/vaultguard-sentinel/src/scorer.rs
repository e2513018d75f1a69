// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in [`Scorer`] implementations.

use serde::Deserialize;
use vaultguard_core::{FEATURE_COUNT, Feature, FeatureVector, Scorer};

/// Always returns the same probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantScorer {
    probability: f64,
}

impl ConstantScorer {
    pub fn new(probability: f64) -> Self {
        Self { probability }
    }
}

impl Scorer for ConstantScorer {
    fn name(&self) -> &str {
        "constant"
    }

    fn score(&self, _features: &FeatureVector) -> f64 {
        self.probability
    }
}

/// How a [`Rule`] compares a feature value with its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    Gt,
    Ge,
    Lt,
    Le,
    Eq,
}

impl Comparison {
    fn holds(self, value: f64, threshold: f64) -> bool {
        match self {
            Comparison::Gt => value > threshold,
            Comparison::Ge => value >= threshold,
            Comparison::Lt => value < threshold,
            Comparison::Le => value <= threshold,
            Comparison::Eq => value == threshold,
        }
    }
}

/// Adds `weight` to the score when `feature <comparison> threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rule {
    pub feature: Feature,
    pub comparison: Comparison,
    pub threshold: f64,
    pub weight: f64,
}

impl Rule {
    pub fn new(feature: Feature, comparison: Comparison, threshold: f64, weight: f64) -> Self {
        Self {
            feature,
            comparison,
            threshold,
            weight,
        }
    }
}

/// Table-driven scorer: `base` plus the weights of every matching rule,
/// clamped into `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleScorer {
    base: f64,
    rules: Vec<Rule>,
}

impl RuleScorer {
    pub fn new(base: f64, rules: Vec<Rule>) -> Self {
        Self { base, rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

impl Scorer for RuleScorer {
    fn name(&self) -> &str {
        "rules"
    }

    fn score(&self, features: &FeatureVector) -> f64 {
        let total: f64 = self
            .rules
            .iter()
            .filter(|rule| rule.comparison.holds(features.get(rule.feature), rule.threshold))
            .map(|rule| rule.weight)
            .sum();
        (self.base + total).clamp(0.0, 1.0)
    }
}

/// Logistic regression over the feature vector: `sigmoid(w . x + bias)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticScorer {
    weights: [f64; FEATURE_COUNT],
    bias: f64,
}

impl LogisticScorer {
    pub fn new(weights: [f64; FEATURE_COUNT], bias: f64) -> Self {
        Self { weights, bias }
    }
}

impl Scorer for LogisticScorer {
    fn name(&self) -> &str {
        "logistic"
    }

    fn score(&self, features: &FeatureVector) -> f64 {
        let z: f64 = self
            .weights
            .iter()
            .zip(features.as_array())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.bias;
        1.0 / (1.0 + (-z).exp())
    }
}
