use crate::secure_config::KEYRING_SERVICE;
use thiserror::Error;
use tracing::{debug, info, warn};

const ACCESS_TOKEN_KEY: &str = "accessToken";

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),
    #[error("Access token is empty")]
    EmptyToken,
}

/// Where the session's access token lives between runs.
///
/// The token is written by whatever logs the operator in; this app only reads
/// it and hands it to the operations that need it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionStore {
    override_token: Option<String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that always answers with `token` and never touches the keychain
    pub fn with_override(token: Option<String>) -> Self {
        Self {
            override_token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    fn entry() -> Result<keyring::Entry, SessionError> {
        Ok(keyring::Entry::new(KEYRING_SERVICE, ACCESS_TOKEN_KEY)?)
    }

    pub fn access_token(&self) -> Result<Option<String>, SessionError> {
        if let Some(token) = &self.override_token {
            return Ok(Some(token.clone()));
        }

        match Self::entry()?.get_password() {
            Ok(token) if token.trim().is_empty() => Ok(None),
            Ok(token) => {
                debug!("Session: access token found");
                Ok(Some(token))
            }
            Err(keyring::Error::NoEntry) => {
                debug!("Session: no access token stored");
                Ok(None)
            }
            Err(e) => Err(SessionError::Keyring(e)),
        }
    }

    /// Token for an operation that needs one. Keychain failures read as
    /// "not logged in".
    pub fn current_token(&self) -> Option<String> {
        match self.access_token() {
            Ok(token) => token,
            Err(e) => {
                warn!("Session: could not read access token: {}", e);
                None
            }
        }
    }

    pub fn store_access_token(&self, token: &str) -> Result<(), SessionError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(SessionError::EmptyToken);
        }
        Self::entry()?.set_password(token)?;
        info!("Session: access token stored");
        Ok(())
    }

    pub fn clear(&self) -> Result<(), SessionError> {
        match Self::entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => {
                info!("Session: access token cleared");
                Ok(())
            }
            Err(e) => Err(SessionError::Keyring(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_short_circuits_keychain() {
        let store = SessionStore::with_override(Some("dev-token".to_string()));
        assert_eq!(store.access_token().unwrap().as_deref(), Some("dev-token"));
        assert_eq!(store.current_token().as_deref(), Some("dev-token"));
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let store = SessionStore::with_override(Some(" ".to_string()));
        assert_eq!(store, SessionStore::new());
    }

    #[test]
    fn test_empty_token_is_rejected_before_keychain() {
        let store = SessionStore::new();
        assert!(matches!(
            store.store_access_token("  "),
            Err(SessionError::EmptyToken)
        ));
    }
}
