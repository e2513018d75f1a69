// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scorer double that records how often it was consulted.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use vaultguard_core::{FeatureVector, Scorer};

/// Returns a preset probability (which may be out of range or NaN, to
/// exercise clamping) and counts calls.
#[derive(Debug, Clone)]
pub struct FixedScorer {
    value: f64,
    calls: Arc<AtomicUsize>,
}

impl FixedScorer {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Scorer for FixedScorer {
    fn name(&self) -> &str {
        "fixed"
    }

    fn score(&self, _features: &FeatureVector) -> f64 {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.value
    }
}
