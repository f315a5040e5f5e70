//! Primary API credentials
//!
//! Loaded once from the environment at startup and handed to the API client.
//! They are never written to the config file.

use crate::constants::env_vars;
use crate::error::AppError;
use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub api_key: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_key: api_key.into(),
        }
    }

    /// Reads `CLIST_USER` and `CLIST_API_KEY`.
    ///
    /// # Errors
    /// * `AppError::MissingCredential` - a variable is unset or blank
    pub fn from_env() -> Result<Self, AppError> {
        let username = read_required(env_vars::USERNAME)?;
        let api_key = read_required(env_vars::API_KEY)?;
        Ok(Self { username, api_key })
    }

    /// Query parameters every primary API request carries.
    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("username", self.username.clone()),
            ("api_key", self.api_key.clone()),
        ]
    }

    /// API key with everything but the last four characters hidden.
    pub fn masked_key(&self) -> String {
        let visible: String = self
            .api_key
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        if self.api_key.chars().count() <= 4 {
            "****".to_string()
        } else {
            format!("****{visible}")
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("api_key", &self.masked_key())
            .finish()
    }
}

fn read_required(var: &str) -> Result<String, AppError> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::missing_credential(var)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        unsafe {
            std::env::remove_var(env_vars::USERNAME);
            std::env::remove_var(env_vars::API_KEY);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_reads_both_values() {
        clear_env();
        unsafe {
            std::env::set_var(env_vars::USERNAME, "alice");
            std::env::set_var(env_vars::API_KEY, "0123456789abcdef");
        }

        let credentials = Credentials::from_env().unwrap();
        assert_eq!(credentials, Credentials::new("alice", "0123456789abcdef"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_missing_key_names_variable() {
        clear_env();
        unsafe {
            std::env::set_var(env_vars::USERNAME, "alice");
        }

        let err = Credentials::from_env().unwrap_err();
        match err {
            AppError::MissingCredential { var } => assert_eq!(var, env_vars::API_KEY),
            other => panic!("unexpected error: {other:?}"),
        }

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_blank_user_is_missing() {
        clear_env();
        unsafe {
            std::env::set_var(env_vars::USERNAME, "  ");
            std::env::set_var(env_vars::API_KEY, "key");
        }

        assert!(matches!(
            Credentials::from_env(),
            Err(AppError::MissingCredential { .. })
        ));

        clear_env();
    }

    #[test]
    fn test_debug_masks_api_key() {
        let credentials = Credentials::new("alice", "0123456789abcdef");
        let debug = format!("{credentials:?}");

        assert!(debug.contains("alice"));
        assert!(debug.contains("****cdef"));
        assert!(!debug.contains("0123456789abcdef"));
        assert_eq!(Credentials::new("bob", "abc").masked_key(), "****");
    }

    #[test]
    fn test_query_pairs() {
        let credentials = Credentials::new("alice", "secret");
        let pairs = credentials.query_pairs();
        assert_eq!(pairs[0], ("username", "alice".to_string()));
        assert_eq!(pairs[1], ("api_key", "secret".to_string()));
    }
}
