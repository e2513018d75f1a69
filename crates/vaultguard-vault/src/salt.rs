// SPDX-FileCopyrightText: 2026 VaultGuard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! File-backed salt store.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};
use vaultguard_core::{SALT_LEN, SaltStore, VaultError};

use crate::kdf::generate_salt;

/// Keeps the vault salt as a raw 16-byte file.
///
/// The file is written once: a temporary file in the same directory is
/// filled, synced, and then linked into place without clobbering, so a
/// concurrent creator or a crash can never leave a partial salt behind.
/// On unix the file is owner read/write only.
#[derive(Debug, Clone)]
pub struct FileSaltStore {
    path: PathBuf,
}

impl FileSaltStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<[u8; SALT_LEN]>, VaultError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => {
                let len = bytes.len();
                let salt: [u8; SALT_LEN] = bytes.try_into().map_err(|_| VaultError::CorruptSalt {
                    path: self.path.clone(),
                    len,
                })?;
                Ok(Some(salt))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn create(&self) -> Result<[u8; SALT_LEN], VaultError> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&parent).map_err(|e| self.io_error(e))?;

        let salt = generate_salt()?;
        let mut tmp = NamedTempFile::new_in(&parent).map_err(|e| self.io_error(e))?;
        tmp.write_all(&salt).map_err(|e| self.io_error(e))?;
        tmp.as_file().sync_all().map_err(|e| self.io_error(e))?;

        match tmp.persist_noclobber(&self.path) {
            Ok(_) => {
                info!(path = %self.path.display(), "vault salt created");
                Ok(salt)
            }
            Err(e) if e.error.kind() == ErrorKind::AlreadyExists => {
                // Lost the race to another creator: theirs is canonical.
                debug!(path = %self.path.display(), "salt appeared during creation");
                self.read()?
                    .ok_or_else(|| VaultError::Internal("salt vanished after creation".to_string()))
            }
            Err(e) => Err(self.io_error(e.error)),
        }
    }

    fn io_error(&self, source: std::io::Error) -> VaultError {
        VaultError::Salt {
            path: self.path.clone(),
            source,
        }
    }
}

impl SaltStore for FileSaltStore {
    fn load_or_create(&self) -> Result<[u8; SALT_LEN], VaultError> {
        match self.read()? {
            Some(salt) => Ok(salt),
            None => self.create(),
        }
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }
}
