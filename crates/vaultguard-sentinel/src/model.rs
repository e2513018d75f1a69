// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scorer model artifacts.
//!
//! A model is a TOML file whose `kind` selects the scorer:
//!
//! ```toml
//! kind = "rules"
//! base = 0.05
//!
//! [[rules]]
//! feature = "keyword_count"
//! comparison = "ge"
//! threshold = 2
//! weight = 0.4
//! ```
//!
//! ```toml
//! kind = "logistic"
//! bias = -4.0
//!
//! [weights]
//! keyword_count = 1.2
//! hyphen_count = 0.3
//! ```
//!
//! Logistic weights not listed default to zero.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::info;
use vaultguard_core::{FEATURE_COUNT, Feature, Scorer, VaultError};

use crate::scorer::{ConstantScorer, LogisticScorer, Rule, RuleScorer};

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
enum ModelArtifact {
    Constant {
        probability: f64,
    },
    Rules {
        #[serde(default)]
        base: f64,
        #[serde(default)]
        rules: Vec<Rule>,
    },
    Logistic {
        #[serde(default)]
        bias: f64,
        #[serde(default)]
        weights: HashMap<Feature, f64>,
    },
}

impl ModelArtifact {
    fn validate(&self) -> Result<(), String> {
        let finite = |name: &str, v: f64| {
            if v.is_finite() {
                Ok(())
            } else {
                Err(format!("{name} must be a finite number"))
            }
        };
        match self {
            ModelArtifact::Constant { probability } => {
                finite("probability", *probability)?;
                if !(0.0..=1.0).contains(probability) {
                    return Err(format!("probability {probability} is outside [0, 1]"));
                }
            }
            ModelArtifact::Rules { base, rules } => {
                finite("base", *base)?;
                for rule in rules {
                    finite("rule threshold", rule.threshold)?;
                    finite("rule weight", rule.weight)?;
                }
            }
            ModelArtifact::Logistic { bias, weights } => {
                finite("bias", *bias)?;
                for (feature, weight) in weights {
                    finite(&format!("weight for {feature}"), *weight)?;
                }
            }
        }
        Ok(())
    }

    fn into_scorer(self) -> Box<dyn Scorer> {
        match self {
            ModelArtifact::Constant { probability } => Box::new(ConstantScorer::new(probability)),
            ModelArtifact::Rules { base, rules } => Box::new(RuleScorer::new(base, rules)),
            ModelArtifact::Logistic { bias, weights } => {
                let mut dense = [0.0; FEATURE_COUNT];
                for (feature, weight) in weights {
                    dense[feature.index()] = weight;
                }
                Box::new(LogisticScorer::new(dense, bias))
            }
        }
    }
}

/// Parse a model artifact from TOML text.
pub fn parse_scorer(content: &str) -> Result<Box<dyn Scorer>, VaultError> {
    let artifact: ModelArtifact =
        toml::from_str(content).map_err(|e| VaultError::Model(format!("invalid model: {e}")))?;
    artifact
        .validate()
        .map_err(|e| VaultError::Model(format!("invalid model: {e}")))?;
    Ok(artifact.into_scorer())
}

/// Load a model artifact from `path`.
pub fn load_scorer(path: &Path) -> Result<Box<dyn Scorer>, VaultError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| VaultError::Model(format!("cannot read {}: {e}", path.display())))?;
    let scorer = parse_scorer(&content)?;
    info!(path = %path.display(), scorer = scorer.name(), "scorer model loaded");
    Ok(scorer)
}
