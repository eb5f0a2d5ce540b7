//! Secret retrieval.
//!
//! Provides the secrets store abstraction with implementations for
//! different backends.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `SecretStore` trait
//! 2. Add the implementation in a new file (e.g., `vault.rs`)
//! 3. Re-export from this module

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{Result, SecretError};

pub mod aws;

pub use aws::AwsSecretsManager;

/// Secrets store trait.
///
/// Abstracts fetching a secret's string payload by id so the injection
/// flow can run against AWS or an in-memory store.
pub trait SecretStore {
    /// Backend name for logging.
    fn name(&self) -> &'static str;

    /// Fetch the string payload of a secret.
    ///
    /// # Errors
    ///
    /// Returns `SecretError` if the secret cannot be retrieved or has no
    /// string payload.
    fn secret_string(&self, secret_id: &str) -> Result<Zeroizing<String>>;
}

/// Spotify API credentials stored as a JSON secret.
pub struct SpotifyCredentials {
    pub client_id: String,
    pub client_secret: Zeroizing<String>,
}

impl fmt::Debug for SpotifyCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotifyCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

impl SpotifyCredentials {
    /// Parse credentials from a JSON payload.
    ///
    /// Both `client_id` and `client_secret` are required; other fields are
    /// ignored.
    pub fn from_json(secret_id: &str, payload: &str) -> Result<Self> {
        let raw: RawCredentials =
            serde_json::from_str(payload).map_err(|source| SecretError::InvalidJson {
                secret_id: secret_id.to_string(),
                source,
            })?;
        Ok(Self {
            client_id: raw.client_id,
            client_secret: Zeroizing::new(raw.client_secret),
        })
    }
}

#[derive(Deserialize)]
struct RawCredentials {
    client_id: String,
    client_secret: String,
}

/// Fetch and parse the Spotify credentials secret.
///
/// Makes a single call to the store. Nothing is retried or cached.
pub fn fetch_credentials(store: &dyn SecretStore, secret_id: &str) -> Result<SpotifyCredentials> {
    debug!(store = store.name(), secret_id, "fetching secret");
    let payload = store.secret_string(secret_id)?;
    let credentials = SpotifyCredentials::from_json(secret_id, &payload)?;
    debug!(
        client_id_len = credentials.client_id.len(),
        client_secret_len = credentials.client_secret.len(),
        "secret parsed"
    );
    Ok(credentials)
}

/// In-memory secrets store.
///
/// Maps secret ids to payloads. Used by tests and by the `test-store`
/// feature, which loads a single payload from the environment.
#[derive(Default)]
pub struct MemoryStore {
    secrets: HashMap<String, Zeroizing<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a secret, returning the store for chaining.
    pub fn with(mut self, secret_id: impl Into<String>, payload: impl Into<String>) -> Self {
        self.insert(secret_id, payload);
        self
    }

    pub fn insert(&mut self, secret_id: impl Into<String>, payload: impl Into<String>) {
        self.secrets.insert(secret_id.into(), Zeroizing::new(payload.into()));
    }
}

impl SecretStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn secret_string(&self, secret_id: &str) -> Result<Zeroizing<String>> {
        self.secrets.get(secret_id).cloned().ok_or_else(|| {
            SecretError::Request {
                secret_id: secret_id.to_string(),
                reason: "secret not found".to_string(),
            }
            .into()
        })
    }
}
