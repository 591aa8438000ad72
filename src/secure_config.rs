use keyring::Entry;
use std::sync::{Arc, OnceLock};
use thiserror::Error;
use tracing::{debug, info};

pub const KEYRING_SERVICE: &str = "marquee";
const TMDB_TOKEN_KEY: &str = "tmdb_read_token";

#[derive(Error, Debug)]
pub enum SecureConfigError {
    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),
}

/// Secrets loaded from the system keychain
#[derive(Debug, Clone, Default)]
pub struct SecureConfigData {
    pub tmdb_read_token: Option<String>,
}

/// Lazy-loading secure configuration manager
/// Cloning is cheap (clones Arc), and all clones share the same lazy-loaded data
#[derive(Clone, Debug)]
pub struct SecureConfig {
    inner: Arc<OnceLock<SecureConfigData>>,
}

impl PartialEq for SecureConfig {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for SecureConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SecureConfig {
    /// Create a new lazy secure config (doesn't access keyring yet)
    pub fn new() -> Self {
        SecureConfig {
            inner: Arc::new(OnceLock::new()),
        }
    }

    /// Create a secure config with pre-populated data (for testing only)
    #[cfg(test)]
    pub fn new_with_data(data: SecureConfigData) -> Self {
        let inner = Arc::new(OnceLock::new());
        let _ = inner.set(data);
        SecureConfig { inner }
    }

    /// Get the secure configuration, loading from keyring on first access.
    /// This may prompt for the system keychain password.
    pub fn get(&self) -> Result<&SecureConfigData, SecureConfigError> {
        if let Some(data) = self.inner.get() {
            return Ok(data);
        }

        info!("SecureConfig: Loading from keychain (password may be required)...");
        let data = Self::load_from_keychain()?;

        // First one wins if two callers raced here
        Ok(self.inner.get_or_init(|| data))
    }

    fn load_from_keychain() -> Result<SecureConfigData, SecureConfigError> {
        let tmdb_read_token = match Entry::new(KEYRING_SERVICE, TMDB_TOKEN_KEY)?.get_password() {
            Ok(token) => {
                debug!("SecureConfig: Loaded TMDB read token");
                Some(token)
            }
            Err(keyring::Error::NoEntry) => {
                debug!("SecureConfig: No TMDB read token found");
                None
            }
            Err(e) => return Err(SecureConfigError::Keyring(e)),
        };

        Ok(SecureConfigData { tmdb_read_token })
    }

    /// Store the TMDB read token in the system keychain
    pub fn store_tmdb_read_token(token: &str) -> Result<(), SecureConfigError> {
        Entry::new(KEYRING_SERVICE, TMDB_TOKEN_KEY)?.set_password(token)?;
        info!("SecureConfig: Stored TMDB read token");
        Ok(())
    }
}
