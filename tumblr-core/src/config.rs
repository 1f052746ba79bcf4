//! Client configuration and credentials.
//!
//! Handles the account settings the client is built from: the credential
//! pair used for authenticated calls, the blog name used for public
//! endpoints, and transport tuning. Configuration can be persisted as TOML
//! at explicit paths.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{TumblrError, TumblrResult};

/// Top-level client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Account email, sent with every authenticated call.
    #[serde(default)]
    pub email: String,

    /// Account password, sent with every authenticated call.
    #[serde(default)]
    pub password: String,

    /// Blog name: the `<name>` in `<name>.tumblr.com`, used to build the
    /// public endpoint host.
    #[serde(default)]
    pub name: String,

    /// API request timeout in milliseconds.
    #[serde(default = "default_api_timeout")]
    pub api_timeout_ms: u64,

    /// Override for the public (per-blog) endpoint root, e.g. a proxy or a
    /// test server. When unset the live `http://<name>.tumblr.com` host is
    /// used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_root: Option<String>,

    /// Override for the private (shared) endpoint root. When unset the live
    /// `http://www.tumblr.com` host is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_root: Option<String>,
}

fn default_api_timeout() -> u64 {
    constants::DEFAULT_API_TIMEOUT_MS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            name: String::new(),
            api_timeout_ms: default_api_timeout(),
            public_root: None,
            private_root: None,
        }
    }
}

impl ClientConfig {
    /// Build a configuration from the three account fields, keeping every
    /// other setting at its default.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> TumblrResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a TOML file, creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> TumblrResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| TumblrError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Immutable credential pair merged into every authenticated request.
///
/// Constructed once; both fields are required and non-empty. Debug output
/// redacts the password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Build a credential pair, rejecting a missing or empty field.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> TumblrResult<Self> {
        let email = email.into();
        let password = password.into();
        if email.is_empty() {
            return Err(TumblrError::MissingCredential("email".to_string()));
        }
        if password.is_empty() {
            return Err(TumblrError::MissingCredential("password".to_string()));
        }
        Ok(Self { email, password })
    }

    /// Build the credential pair from a client configuration.
    pub fn from_config(config: &ClientConfig) -> TumblrResult<Self> {
        Self::new(config.email.clone(), config.password.clone())
    }

    /// The account email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The account password.
    pub fn password(&self) -> &str {
        &self.password
    }
}
