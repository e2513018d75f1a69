// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the VaultGuard secrets vault.
//!
//! This crate provides the error taxonomy, the shared data types, and the
//! seam traits (record store, salt store, scorer) that the engine crates
//! are built against.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{IntegrityError, VaultError};
pub use traits::salt::SALT_LEN;
pub use traits::{RecordStore, SaltStore, Scorer};
pub use types::{FEATURE_COUNT, Feature, FeatureVector, SecretEntry};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn access_denied_message_carries_no_detail() {
        assert_eq!(VaultError::AccessDenied.to_string(), "access denied");
    }

    #[test]
    fn integrity_error_converts_into_vault_error() {
        let err: VaultError = IntegrityError.into();
        assert!(matches!(err, VaultError::Integrity(IntegrityError)));
        assert!(err.to_string().contains("integrity check failed"));
    }

    #[test]
    fn corrupt_salt_reports_length() {
        let err = VaultError::CorruptSalt {
            path: "/tmp/salt.bin".into(),
            len: 3,
        };
        assert_eq!(
            err.to_string(),
            "corrupted salt at /tmp/salt.bin: expected 16 bytes, found 3"
        );
    }

    #[test]
    fn feature_schema_has_seven_positions_in_order() {
        assert_eq!(Feature::ALL.len(), FEATURE_COUNT);
        for (i, feature) in Feature::ALL.iter().enumerate() {
            assert_eq!(feature.index(), i);
        }
        assert_eq!(Feature::Length.index(), 0);
        assert_eq!(Feature::Entropy.index(), 6);
    }

    #[test]
    fn feature_names_round_trip_through_strum() {
        for feature in Feature::ALL {
            let name = feature.to_string();
            assert_eq!(Feature::from_str(&name).unwrap(), feature);
        }
        assert_eq!(Feature::KeywordCount.to_string(), "keyword_count");
    }

    #[test]
    fn feature_serde_uses_snake_case() {
        let json = serde_json::to_string(&Feature::SubdomainCount).unwrap();
        assert_eq!(json, "\"subdomain_count\"");
    }

    #[test]
    fn feature_vector_accessors() {
        let v = FeatureVector::from_array([54.0, 2.0, 4.0, 0.0, 4.0, 2.0, 4.1]);
        assert_eq!(v.get(Feature::HyphenCount), 4.0);
        assert_eq!(v.get(Feature::IsHttps), 0.0);
        assert!(!v.is_zero());
        assert!(FeatureVector::zeros().is_zero());
        assert_eq!(v.iter().count(), FEATURE_COUNT);
    }

    #[test]
    fn secret_entry_is_timestamped() {
        let entry = SecretEntry::new("example.com", "alice", "token");
        assert!(chrono::DateTime::parse_from_rfc3339(&entry.created_at).is_ok());
    }

    #[test]
    fn all_traits_are_object_safe() {
        fn _record_store(_: &dyn RecordStore) {}
        fn _salt_store(_: &dyn SaltStore) {}
        fn _scorer(_: &dyn Scorer) {}
    }
}
