//! Client configuration.

use crate::protocol::constants::DEFAULT_SCHEME;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration for a [`ChannelsClient`](crate::ChannelsClient).
///
/// The crate reads no files or environment variables; host applications can
/// deserialize this from their own configuration since it implements serde's
/// traits.
///
/// # Examples
///
/// ```
/// use spv_channels::client::{ClientConfig, Credentials};
///
/// let config = ClientConfig::new("localhost:5010", "v1")
///     .with_basic_auth("dev", "dev");
/// assert!(matches!(config.credentials(), Credentials::Basic { .. }));
///
/// let config = config.with_bearer_token("tok");
/// assert_eq!(config.credentials(), Credentials::Bearer("tok"));
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Accept any TLS certificate, like `curl -k`.
    ///
    /// Only for local development. Never enable this against a production
    /// server: it disables all protection against man-in-the-middle attacks.
    pub insecure_skip_verify: bool,
    /// Host and optional port, without scheme (e.g. `localhost:5010`).
    pub base_url: String,
    /// API version path segment (e.g. `v1`).
    pub version: String,
    /// Basic-auth user, used only when `token` is empty.
    pub username: String,
    /// Basic-auth password, used only when `token` is empty.
    pub password: String,
    /// Bearer token. Takes precedence over username/password when non-empty.
    pub token: String,
    /// URL scheme, `https` unless talking to a plaintext local server.
    pub scheme: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            insecure_skip_verify: false,
            base_url: String::new(),
            version: "v1".to_string(),
            username: String::new(),
            password: String::new(),
            token: String::new(),
            scheme: DEFAULT_SCHEME.to_string(),
        }
    }
}

impl ClientConfig {
    /// Configuration for `base_url` and API `version` with no credentials.
    pub fn new(base_url: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            version: version.into(),
            ..Default::default()
        }
    }

    /// Set HTTP Basic credentials.
    pub fn with_basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Set a bearer token.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Toggle TLS certificate verification off (`true`) or on (`false`).
    ///
    /// See [`ClientConfig::insecure_skip_verify`].
    pub fn with_insecure_skip_verify(mut self, insecure: bool) -> Self {
        self.insecure_skip_verify = insecure;
        self
    }

    /// Override the URL scheme.
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// The credentials that will be attached to every request.
    pub fn credentials(&self) -> Credentials<'_> {
        if self.token.is_empty() {
            Credentials::Basic {
                username: &self.username,
                password: &self.password,
            }
        } else {
            Credentials::Bearer(&self.token)
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("insecure_skip_verify", &self.insecure_skip_verify)
            .field("base_url", &self.base_url)
            .field("version", &self.version)
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("token", &redact(&self.token))
            .field("scheme", &self.scheme)
            .finish()
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() {
        ""
    } else {
        "<redacted>"
    }
}

/// Authentication scheme selected from a [`ClientConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credentials<'a> {
    /// HTTP Basic with the configured pair (possibly empty).
    Basic {
        /// User name.
        username: &'a str,
        /// Password.
        password: &'a str,
    },
    /// `Authorization: Bearer`.
    Bearer(&'a str),
}

impl Credentials<'_> {
    /// Value for the `Authorization` header.
    pub fn header_value(&self) -> String {
        match self {
            Credentials::Basic { username, password } => {
                crate::protocol::basic_auth_value(username, password)
            }
            Credentials::Bearer(token) => crate::protocol::bearer_auth_value(token),
        }
    }
}
