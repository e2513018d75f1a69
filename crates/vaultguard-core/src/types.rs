// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the vault, the record store, and the URL sentinel.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Number of features in a [`FeatureVector`].
pub const FEATURE_COUNT: usize = 7;

/// One position in the URL feature schema.
///
/// The discriminant is the index of the feature inside a [`FeatureVector`].
/// Order and count are a contract with every scorer and must not change.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Length of the URL in characters.
    Length = 0,
    /// Number of `.` characters in the URL.
    DotCount = 1,
    /// Number of `-` characters in the URL.
    HyphenCount = 2,
    /// 1.0 if the URL literally starts with `https`, else 0.0.
    IsHttps = 3,
    /// Number of phishing vocabulary words contained in the URL.
    KeywordCount = 4,
    /// Number of `.` characters in the network location.
    SubdomainCount = 5,
    /// Shannon entropy (base 2) of the URL's character distribution.
    Entropy = 6,
}

impl Feature {
    /// All features in schema order.
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::Length,
        Feature::DotCount,
        Feature::HyphenCount,
        Feature::IsHttps,
        Feature::KeywordCount,
        Feature::SubdomainCount,
        Feature::Entropy,
    ];

    /// Position of this feature inside a [`FeatureVector`].
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Fixed-schema numeric summary of a URL, in [`Feature::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// The fallback vector produced when extraction fails.
    pub const fn zeros() -> Self {
        Self([0.0; FEATURE_COUNT])
    }

    pub const fn from_array(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.0[feature.index()]
    }

    pub fn as_array(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|v| *v == 0.0)
    }

    /// Iterate `(feature, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        Feature::ALL.iter().map(move |f| (*f, self.get(*f)))
    }
}

/// A stored credential: plaintext metadata plus an opaque encrypted password.
///
/// The plaintext password never appears here; `ciphertext` is the
/// cipher's text token and is unusable without the session key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretEntry {
    /// Site identifier, usually the URL the user typed.
    pub site: String,
    pub username: String,
    /// Encrypted password token.
    pub ciphertext: String,
    /// RFC 3339 timestamp of insertion.
    pub created_at: String,
}

impl SecretEntry {
    /// Build an entry stamped with the current time.
    pub fn new(
        site: impl Into<String>,
        username: impl Into<String>,
        ciphertext: impl Into<String>,
    ) -> Self {
        Self {
            site: site.into(),
            username: username.into(),
            ciphertext: ciphertext.into(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
