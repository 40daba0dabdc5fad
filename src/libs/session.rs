//! Persistent session token storage.
//!
//! The bearer token returned by `/login` is the only piece of identity the
//! client keeps. It is written encrypted (AES-256-CBC, base64) to a file in
//! the application data directory and survives restarts until `logout`
//! removes it.
//!
//! ```rust,no_run
//! use shelf::libs::session::SessionStore;
//!
//! let session = SessionStore::new()?;
//! session.set_token("eyJhbGciOi...")?;
//! assert!(session.token().is_some());
//! session.clear_token()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use aes::Aes256;
use anyhow::{Context, Result};
use base64::prelude::*;
use block_modes::block_padding::Pkcs7;
use block_modes::{BlockMode, Cbc};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

// Include generated metadata with encryption keys
include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

type Aes256Cbc = Cbc<Aes256, Pkcs7>;

pub const SESSION_TOKEN_FILE: &str = ".session_token";

/// File-backed holder of the current bearer token.
#[derive(Clone, Debug)]
pub struct SessionStore {
    path: PathBuf,
    key: Vec<u8>,
    iv: Vec<u8>,
}

impl SessionStore {
    /// Session stored in the default application data directory.
    pub fn new() -> Result<Self> {
        let path = DataStorage::new().get_path(SESSION_TOKEN_FILE)?;
        Ok(Self::at(path))
    }

    /// Session stored at an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            key: APP_METADATA_SESSION_KEY.to_vec(),
            iv: APP_METADATA_SESSION_IV.to_vec(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the stored token, or `None` when there is none.
    ///
    /// A file that cannot be read or decrypted counts as no token.
    pub fn token(&self) -> Option<String> {
        match self.read() {
            Ok(token) => token,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "ignoring unreadable session token");
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Persists `token`, replacing any previous one.
    pub fn set_token(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let encoded = self.encrypt(token)?;
        fs::write(&self.path, encoded).with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }

    /// Removes the stored token. A missing token is not an error.
    pub fn clear_token(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("failed to remove {}", self.path.display())),
        }
    }

    fn read(&self) -> Result<Option<String>> {
        let encoded = match fs::read_to_string(&self.path) {
            Ok(encoded) => encoded,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let token = self.decrypt(encoded.trim())?;
        Ok(Some(token).filter(|t| !t.is_empty()))
    }

    fn encrypt(&self, token: &str) -> Result<String> {
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let ciphertext = cipher.encrypt_vec(token.as_bytes());
        Ok(BASE64_STANDARD.encode(ciphertext))
    }

    fn decrypt(&self, encoded: &str) -> Result<String> {
        let ciphertext = BASE64_STANDARD.decode(encoded)?;
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let plaintext = cipher.decrypt_vec(&ciphertext)?;
        Ok(String::from_utf8(plaintext)?)
    }
}
