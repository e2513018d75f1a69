// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sentinel behaviour against the shipped heuristic model, plus property
//! tests for feature extraction.

use std::path::PathBuf;

use proptest::prelude::*;
use vaultguard_core::{FEATURE_COUNT, Feature};
use vaultguard_sentinel::{RiskLevel, Sentinel, extract_features};

fn heuristic_model() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../models/heuristic.toml")
}

#[test]
fn heuristic_model_loads() {
    let sentinel = Sentinel::from_model_path(Some(heuristic_model().as_path()));
    assert!(sentinel.has_scorer());
}

#[test]
fn heuristic_model_flags_the_phishing_example() {
    let sentinel = Sentinel::from_model_path(Some(heuristic_model().as_path()));
    let assessment =
        sentinel.analyze_url("http://paypa1-secure-login-update.totally-real-bank.com");
    assert_eq!(assessment.level, RiskLevel::High);
    assert!(assessment.probability >= 0.70);
    assert!(assessment.probability <= 1.0);
}

#[test]
fn heuristic_model_passes_ordinary_urls() {
    let sentinel = Sentinel::from_model_path(Some(heuristic_model().as_path()));
    assert_eq!(sentinel.analyze_url("https://github.com").level, RiskLevel::Low);
    assert_eq!(sentinel.analyze_url("http://example.com").level, RiskLevel::Low);
}

#[test]
fn heuristic_model_warns_on_keyword_heavy_https_url() {
    let sentinel = Sentinel::from_model_path(Some(heuristic_model().as_path()));
    let assessment = sentinel.analyze_url("https://secure-login.example.com/account");
    assert_eq!(assessment.level, RiskLevel::Moderate);
}

#[test]
fn garbage_model_file_degrades_to_no_scorer() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sentinel_model.pkl");
    std::fs::write(&path, [0x80u8, 0x04, 0x95, 0x00]).unwrap();
    let sentinel = Sentinel::from_model_path(Some(path.as_path()));
    assert!(!sentinel.has_scorer());
    assert_eq!(sentinel.analyze_url("http://paypa1.com").probability, 0.0);
}

proptest! {
    #[test]
    fn extraction_is_total_and_deterministic(url in "\\PC*") {
        let first = extract_features(&url);
        let second = extract_features(&url);
        prop_assert_eq!(first, second);
        prop_assert_eq!(first.as_array().len(), FEATURE_COUNT);
        prop_assert!(first.as_array().iter().all(|v| v.is_finite() && *v >= 0.0));
    }

    #[test]
    fn length_and_counts_are_consistent(url in "[a-z0-9./:-]{1,80}") {
        let f = extract_features(&url);
        if !f.is_zero() {
            prop_assert_eq!(f.get(Feature::Length), url.chars().count() as f64);
            prop_assert!(f.get(Feature::DotCount) <= f.get(Feature::Length));
            prop_assert!(f.get(Feature::SubdomainCount) <= f.get(Feature::DotCount));
            prop_assert!(f.get(Feature::KeywordCount) <= 8.0);
            prop_assert!(f.get(Feature::Entropy) <= (url.chars().count() as f64).log2() + 1e-9);
        }
    }

    #[test]
    fn sentinel_probability_is_always_in_range(url in ".*") {
        let sentinel = Sentinel::from_model_path(Some(heuristic_model().as_path()));
        let p = sentinel.analyze_url(&url).probability;
        prop_assert!((0.0..=1.0).contains(&p));
    }
}
