//! Authentication module for the bunny.net client.
//!
//! bunny.net authenticates every account-level request with the account API
//! key in the `AccessKey` header. The key can be supplied after the client is
//! built and replaced at any time; requests dispatched while no key is set
//! fail locally with a configuration error.

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::errors::{BunnyError, BunnyResult};

/// Header carrying the API key.
pub const ACCESS_KEY_HEADER: &str = "AccessKey";

/// Authentication provider trait.
pub trait AuthProvider: Send + Sync {
    /// Apply authentication to request headers.
    ///
    /// Fails with [`BunnyError::Configuration`] when no credential is set.
    fn apply_auth(&self, headers: &mut HashMap<String, String>) -> BunnyResult<()>;

    /// Returns true if a credential is currently available.
    fn is_configured(&self) -> bool;
}

/// Checks that an API key is usable and wraps it as a secret.
pub fn validate_api_key(key: &str) -> BunnyResult<SecretString> {
    if key.is_empty() {
        return Err(BunnyError::invalid_argument(
            "api_key",
            "API key is required and must be a non-empty string",
        ));
    }
    Ok(SecretString::new(key.to_string()))
}

/// Replaceable `AccessKey` credential.
pub struct AccessKeyAuth {
    api_key: RwLock<Option<SecretString>>,
}

impl AccessKeyAuth {
    /// Creates a provider with no credential set.
    pub fn new() -> Self {
        Self {
            api_key: RwLock::new(None),
        }
    }

    /// Creates a provider holding `api_key`.
    pub fn with_key(api_key: SecretString) -> Self {
        Self {
            api_key: RwLock::new(Some(api_key)),
        }
    }

    /// Replaces the stored API key.
    pub fn set_key(&self, api_key: &str) -> BunnyResult<()> {
        let secret = validate_api_key(api_key)?;
        *self.api_key.write().unwrap_or_else(PoisonError::into_inner) = Some(secret);
        tracing::debug!(key_hint = %self.key_hint(), "API key updated");
        Ok(())
    }

    /// Replaces the stored API key from an untyped value.
    ///
    /// Anything other than a non-empty JSON string is rejected.
    pub fn set_key_from_value(&self, api_key: &Value) -> BunnyResult<()> {
        match api_key.as_str() {
            Some(key) => self.set_key(key),
            None => Err(BunnyError::invalid_argument(
                "api_key",
                "API key is required and must be a string",
            )),
        }
    }

    /// Gets a hint of the API key for debugging (last 4 characters).
    pub fn key_hint(&self) -> String {
        let guard = self.api_key.read().unwrap_or_else(PoisonError::into_inner);
        match guard.as_ref().map(ExposeSecret::expose_secret) {
            Some(key) if key.len() > 4 => match key.get(key.len() - 4..) {
                Some(tail) => format!("...{}", tail),
                None => "****".to_string(),
            },
            Some(_) => "****".to_string(),
            None => "<unset>".to_string(),
        }
    }
}

impl Default for AccessKeyAuth {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthProvider for AccessKeyAuth {
    fn apply_auth(&self, headers: &mut HashMap<String, String>) -> BunnyResult<()> {
        let guard = self.api_key.read().unwrap_or_else(PoisonError::into_inner);
        let key = guard.as_ref().ok_or_else(BunnyError::missing_api_key)?;
        headers.insert(ACCESS_KEY_HEADER.to_string(), key.expose_secret().clone());
        Ok(())
    }

    fn is_configured(&self) -> bool {
        self.api_key
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl std::fmt::Debug for AccessKeyAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessKeyAuth")
            .field("api_key", &"[REDACTED]")
            .field("key_hint", &self.key_hint())
            .finish()
    }
}
