// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end vault tests against the SQLite record store and a salt file.

use std::path::Path;
use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use vaultguard_config::model::StorageConfig;
use vaultguard_core::{RecordStore, SaltStore, VaultError};
use vaultguard_storage::SqliteRecordStore;
use vaultguard_vault::{FileSaltStore, Vault, VaultOptions, verify};

const TEST_OPTIONS: VaultOptions = VaultOptions { kdf_iterations: 50 };

fn password(s: &str) -> SecretString {
    SecretString::from(s.to_string())
}

async fn open_store(dir: &Path) -> SqliteRecordStore {
    let config = StorageConfig {
        database_path: dir.join("vault.db").display().to_string(),
        wal_mode: true,
    };
    SqliteRecordStore::open(&config).await.unwrap()
}

async fn open_vault(dir: &Path) -> (Vault, SqliteRecordStore) {
    let store = open_store(dir).await;
    let salt = FileSaltStore::new(dir.join("salt.bin"));
    let vault = Vault::open(Arc::new(store.clone()), Arc::new(salt), TEST_OPTIONS)
        .await
        .unwrap();
    (vault, store)
}

#[tokio::test]
async fn secrets_survive_a_process_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let (vault, store) = open_vault(dir.path()).await;
        assert!(!vault.is_initialized().await.unwrap());
        let session = vault.unlock(&password("correct horse")).await.unwrap();
        session
            .add_secret("github.com", "octocat", &password("Tr0ub4dor&3xtra!"))
            .await
            .unwrap();
        session.lock();
        store.close().await.unwrap();
    }

    let (vault, store) = open_vault(dir.path()).await;
    assert!(vault.is_initialized().await.unwrap());
    let session = vault.unlock(&password("correct horse")).await.unwrap();
    let listed = session.list_secrets().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].site, "github.com");
    assert_eq!(
        listed[0].password.as_ref().unwrap().expose_secret(),
        "Tr0ub4dor&3xtra!"
    );
    assert_eq!(store.secret_count().await.unwrap(), 1);
}

#[tokio::test]
async fn wrong_password_is_denied_and_record_kept() {
    let dir = tempfile::tempdir().unwrap();
    let (vault, store) = open_vault(dir.path()).await;
    vault.unlock(&password("right")).await.unwrap();
    let record = store
        .get_metadata(verify::VERIFICATION_KEY)
        .await
        .unwrap()
        .unwrap();

    let err = vault.unlock(&password("wrong")).await.unwrap_err();
    assert!(matches!(err, VaultError::AccessDenied));
    assert_eq!(err.to_string(), "access denied");

    assert_eq!(
        store.get_metadata(verify::VERIFICATION_KEY).await.unwrap(),
        Some(record)
    );
}

#[tokio::test]
async fn deleting_the_salt_file_locks_the_vault() {
    let dir = tempfile::tempdir().unwrap();
    let (vault, _store) = open_vault(dir.path()).await;
    vault.unlock(&password("pw")).await.unwrap();

    let salt_path = dir.path().join("salt.bin");
    std::fs::remove_file(&salt_path).unwrap();

    let err = vault.unlock(&password("pw")).await.unwrap_err();
    assert!(matches!(err, VaultError::AccessDenied));
    assert!(!FileSaltStore::new(&salt_path).exists());
}

#[tokio::test]
async fn replaced_salt_file_locks_the_vault() {
    let dir = tempfile::tempdir().unwrap();
    let (vault, _store) = open_vault(dir.path()).await;
    vault.unlock(&password("pw")).await.unwrap();

    std::fs::write(dir.path().join("salt.bin"), [0x5a; 16]).unwrap();
    assert!(matches!(
        vault.unlock(&password("pw")).await,
        Err(VaultError::AccessDenied)
    ));
}

#[tokio::test]
async fn truncated_salt_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let (vault, _store) = open_vault(dir.path()).await;
    vault.unlock(&password("pw")).await.unwrap();

    std::fs::write(dir.path().join("salt.bin"), [0x5a; 4]).unwrap();
    assert!(matches!(
        vault.unlock(&password("pw")).await,
        Err(VaultError::CorruptSalt { len: 4, .. })
    ));
}

#[tokio::test]
async fn tampered_row_yields_per_record_failure() {
    let dir = tempfile::tempdir().unwrap();
    let (vault, store) = open_vault(dir.path()).await;
    let session = vault.unlock(&password("pw")).await.unwrap();
    session
        .add_secret("a.example", "u1", &password("first-secret"))
        .await
        .unwrap();
    session
        .add_secret("b.example", "u2", &password("second-secret"))
        .await
        .unwrap();

    store
        .database()
        .connection()
        .call(|conn| -> Result<(), rusqlite::Error> {
            conn.execute(
                "UPDATE secrets SET ciphertext = 'AAAA' || ciphertext WHERE site = 'a.example'",
                [],
            )?;
            Ok(())
        })
        .await
        .unwrap();

    let listed = session.list_secrets().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed[0].password.is_err());
    assert_eq!(
        listed[1].password.as_ref().unwrap().expose_secret(),
        "second-secret"
    );
}

#[tokio::test]
async fn salt_file_is_created_on_first_unlock_only() {
    let dir = tempfile::tempdir().unwrap();
    let salt = FileSaltStore::new(dir.path().join("salt.bin"));
    let (vault, _store) = open_vault(dir.path()).await;

    assert!(!salt.exists());
    vault.unlock(&password("pw")).await.unwrap();
    let created = salt.load_or_create().unwrap();
    vault.unlock(&password("pw")).await.unwrap();
    assert_eq!(salt.load_or_create().unwrap(), created);
}
