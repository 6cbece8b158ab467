//! Client configuration.
//!
//! A `ClientConfig` is immutable once handed to `PipelineClient::new`; every
//! call reads from it and derives a fresh `HttpRequest`. It can be built in
//! code with [`ClientConfig::builder`] or loaded from YAML:
//!
//! ```yaml
//! base_url: http://localhost:8080
//! timeout: 30s
//! raise_on_unexpected_status: true
//! credential:
//!   token: apikey:0123
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

/// Token injected into the headers of every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub token: String,
    /// Scheme written before the token. Empty sends the bare token.
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default = "default_header_name")]
    pub header_name: String,
}

fn default_prefix() -> String {
    "Bearer".to_string()
}

fn default_header_name() -> String {
    "Authorization".to_string()
}

impl Credential {
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            prefix: default_prefix(),
            header_name: default_header_name(),
        }
    }

    /// The `(name, value)` header pair for this credential.
    pub fn header(&self) -> (String, String) {
        let value = if self.prefix.is_empty() {
            self.token.clone()
        } else {
            format!("{} {}", self.prefix, self.token)
        };
        (self.header_name.clone(), value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    #[serde(default)]
    pub headers: Vec<(String, String)>,
    #[serde(default)]
    pub cookies: Vec<(String, String)>,
    /// `None` keeps the transport's own default.
    #[serde(default, with = "humantime_serde")]
    pub timeout: Option<Duration>,
    #[serde(default)]
    pub follow_redirects: bool,
    #[serde(default = "default_verify_ssl")]
    pub verify_ssl: bool,
    #[serde(default)]
    pub credential: Option<Credential>,
    #[serde(default)]
    pub raise_on_unexpected_status: bool,
}

fn default_verify_ssl() -> bool {
    true
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            headers: Vec::new(),
            cookies: Vec::new(),
            timeout: None,
            follow_redirects: false,
            verify_ssl: default_verify_ssl(),
            credential: None,
            raise_on_unexpected_status: false,
        }
    }

    pub fn builder(base_url: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            config: Self::new(base_url),
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let mut config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ApiError::Config(e.to_string()))?;
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| ApiError::Config(format!("{}: {e}", path.display())))?;
        Self::from_yaml_str(&yaml)
    }

    /// Default headers followed by the credential header, if any.
    pub fn request_headers(&self) -> Vec<(String, String)> {
        let mut headers = self.headers.clone();
        if let Some(credential) = &self.credential {
            headers.push(credential.header());
        }
        headers
    }
}

/// Builder for [`ClientConfig`]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Add a default header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.headers.push((name.into(), value.into()));
        self
    }

    /// Add a cookie
    pub fn cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.cookies.push((name.into(), value.into()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    pub fn follow_redirects(mut self, follow: bool) -> Self {
        self.config.follow_redirects = follow;
        self
    }

    pub fn verify_ssl(mut self, verify: bool) -> Self {
        self.config.verify_ssl = verify;
        self
    }

    /// Send `Authorization: Bearer <token>` with every request
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.config.credential = Some(Credential::bearer(token));
        self
    }

    pub fn credential(mut self, credential: Credential) -> Self {
        self.config.credential = Some(credential);
        self
    }

    pub fn raise_on_unexpected_status(mut self, raise: bool) -> Self {
        self.config.raise_on_unexpected_status = raise;
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}
