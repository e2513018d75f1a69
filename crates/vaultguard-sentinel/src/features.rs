// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lexical URL feature extraction.
//!
//! Purely textual: no DNS, no network, linear in the URL length. Every
//! feature is computed on the URL exactly as typed, except
//! [`Feature::SubdomainCount`] which looks at the network location only.
//!
//! The network location is split out the way a generic URL splitter does
//! it, without any normalization, so vectors stay comparable with those a
//! model was trained on.

use std::collections::HashMap;
use std::net::Ipv6Addr;

use thiserror::Error;
use tracing::debug;
use vaultguard_core::{Feature, FeatureVector};

/// Phishing-associated vocabulary. `paypa1` is a homoglyph of `paypal`.
pub const KEYWORDS: [&str; 8] = [
    "login", "verify", "secure", "update", "banking", "paypa1", "signin", "account",
];

/// Why a URL fell back to the zero vector. Never leaves this module.
#[derive(Debug, Error, PartialEq, Eq)]
enum ExtractionFailure {
    #[error("empty URL")]
    Empty,
    #[error("unbalanced brackets in network location")]
    UnbalancedBrackets,
    #[error("bracketed host is not an IPv6 or IPvFuture literal")]
    InvalidBracketedHost,
}

/// Compute the 7-feature vector for `url`.
///
/// Total: any extraction failure yields [`FeatureVector::zeros`].
pub fn extract_features(url: &str) -> FeatureVector {
    match try_extract(url) {
        Ok(features) => features,
        Err(failure) => {
            debug!(%failure, "URL feature extraction fell back to zeros");
            FeatureVector::zeros()
        }
    }
}

fn try_extract(url: &str) -> Result<FeatureVector, ExtractionFailure> {
    if url.is_empty() {
        return Err(ExtractionFailure::Empty);
    }
    let host = netloc(url)?;

    let mut values = [0.0; 7];
    values[Feature::Length.index()] = url.chars().count() as f64;
    values[Feature::DotCount.index()] = count_char(url, '.') as f64;
    values[Feature::HyphenCount.index()] = count_char(url, '-') as f64;
    values[Feature::IsHttps.index()] = if url.starts_with("https") { 1.0 } else { 0.0 };
    values[Feature::KeywordCount.index()] = keyword_count(url) as f64;
    values[Feature::SubdomainCount.index()] = count_char(&host, '.') as f64;
    values[Feature::Entropy.index()] = shannon_entropy(url);
    Ok(FeatureVector::from_array(values))
}

fn count_char(s: &str, needle: char) -> usize {
    s.chars().filter(|c| *c == needle).count()
}

/// Number of vocabulary words contained anywhere in the lowercased URL.
/// Each word counts once however often it occurs.
fn keyword_count(url: &str) -> usize {
    let lowered = url.to_lowercase();
    KEYWORDS.iter().filter(|word| lowered.contains(*word)).count()
}

/// Base-2 Shannon entropy of the character distribution.
///
/// Terms are summed in first-occurrence order so results are bit-for-bit
/// reproducible across runs.
fn shannon_entropy(s: &str) -> f64 {
    let mut order: Vec<char> = Vec::new();
    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut total = 0usize;
    for c in s.chars() {
        total += 1;
        let count = counts.entry(c).or_insert(0);
        if *count == 0 {
            order.push(c);
        }
        *count += 1;
    }
    if total == 0 {
        return 0.0;
    }

    let ln2 = 2.0_f64.ln();
    let sum: f64 = order
        .iter()
        .map(|c| {
            let p = counts[c] as f64 / total as f64;
            p * p.ln() / ln2
        })
        .sum();
    0.0 - sum
}

/// Network location of `url`, or empty if it has no `//` authority.
fn netloc(url: &str) -> Result<String, ExtractionFailure> {
    let cleaned: String = url
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();

    let rest = strip_scheme(&cleaned);
    let Some(after_slashes) = rest.strip_prefix("//") else {
        return Ok(String::new());
    };
    let end = after_slashes
        .find(['/', '?', '#'])
        .unwrap_or(after_slashes.len());
    let host = &after_slashes[..end];

    let open = host.contains('[');
    let close = host.contains(']');
    if open != close {
        return Err(ExtractionFailure::UnbalancedBrackets);
    }
    if open {
        let bracketed = host
            .split_once('[')
            .map(|(_, after)| after.split_once(']').map_or(after, |(inner, _)| inner))
            .unwrap_or_default();
        if !is_valid_bracketed_host(bracketed) {
            return Err(ExtractionFailure::InvalidBracketedHost);
        }
    }
    Ok(host.to_string())
}

/// Drop a leading `scheme:` if present.
///
/// A scheme starts with an ASCII letter and continues with ASCII
/// alphanumerics, `+`, `-` or `.` up to the first `:`.
fn strip_scheme(url: &str) -> &str {
    let Some(colon) = url.find(':') else {
        return url;
    };
    let scheme = &url[..colon];
    let starts_with_letter = scheme
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic());
    let valid = starts_with_letter
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if valid { &url[colon + 1..] } else { url }
}

/// An IPv6 literal (optionally with a `%zone`) or an IPvFuture literal
/// such as `v1.fe80::a+en1`.
fn is_valid_bracketed_host(host: &str) -> bool {
    if let Some(future) = host.strip_prefix('v') {
        let Some((version, address)) = future.split_once('.') else {
            return false;
        };
        return !version.is_empty()
            && version.chars().all(|c| c.is_ascii_hexdigit())
            && !address.is_empty();
    }

    match host.split_once('%') {
        Some((address, zone)) => {
            !zone.is_empty() && !zone.contains('%') && address.parse::<Ipv6Addr>().is_ok()
        }
        None => host.parse::<Ipv6Addr>().is_ok(),
    }
}
