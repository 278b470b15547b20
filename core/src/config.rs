//! Service configuration and credentials.
//!
//! A configuration file holds one table per service. Environment variables
//! prefixed with `WATSON__` override file values, with `__` separating
//! nesting levels (`WATSON__ASSISTANT__URL` maps to `assistant.url`).
//!
//! ```toml
//! [assistant]
//! url = "https://gateway.watsonplatform.net/assistant/api"
//! version = "2019-02-28"
//! username = "**********"
//! password = "**********"
//! ```
//!
//! Credentials equal to [`PLACEHOLDER`] count as unset, so a checked-in file
//! can carry the layout without secrets.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::Path;

use base64::Engine;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Stand-in value for credentials that have not been filled in.
pub const PLACEHOLDER: &str = "**********";

const ENV_PREFIX: &str = "WATSON";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config error ({context}): {source}")]
    Load {
        source: config::ConfigError,
        context: Cow<'static, str>,
    },
}

trait ConfigResultExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T> ConfigResultExt<T> for Result<T, config::ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Load {
            source,
            context: context.into(),
        })
    }
}

/// Connection settings for one Watson service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub url: String,
    /// Release date sent as the `version` query parameter.
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub bearer_token: Option<String>,
    /// Legacy Visual Recognition key, sent as the `api_key` query parameter.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Extra headers attached to every request.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl ServiceConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Load the table named `service` from `path`, then apply `WATSON__`
    /// environment overrides.
    pub fn load(path: impl AsRef<Path>, service: &str) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!(path = %path.display(), service, "loading service config");

        Config::builder()
            .add_source(File::from(path).required(true))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .convert_case(config::Case::Snake),
            )
            .build()
            .context("failed to build config")?
            .get::<ServiceConfig>(service)
            .context(format!("failed to read [{service}]"))
    }

    /// True when a URL is set and no credential is still a placeholder.
    pub fn is_configured(&self) -> bool {
        if self.url.trim().is_empty() || is_placeholder(Some(&self.url)) {
            return false;
        }
        let credentials = [&self.username, &self.password, &self.bearer_token, &self.api_key];
        credentials.into_iter().all(|c| !is_placeholder(c.as_ref()))
    }

    /// Pick the authentication scheme, ignoring placeholder credentials.
    pub fn authenticator(&self) -> Authenticator {
        let real = |value: &Option<String>| value.clone().filter(|v| !is_placeholder(Some(v)));
        if let Some(token) = real(&self.bearer_token) {
            return Authenticator::BearerToken(token);
        }
        if let (Some(username), Some(password)) = (real(&self.username), real(&self.password)) {
            return Authenticator::Basic { username, password };
        }
        if let Some(key) = real(&self.api_key) {
            return Authenticator::ApiKey(key);
        }
        Authenticator::NoAuth
    }
}

fn is_placeholder(value: Option<&String>) -> bool {
    value.is_some_and(|v| v == PLACEHOLDER)
}

/// How credentials are attached to outgoing requests.
#[derive(Clone, PartialEq, Eq)]
pub enum Authenticator {
    NoAuth,
    Basic { username: String, password: String },
    BearerToken(String),
    ApiKey(String),
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Authenticator::NoAuth => f.write_str("NoAuth"),
            Authenticator::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Authenticator::BearerToken(_) => f.write_str("BearerToken(<redacted>)"),
            Authenticator::ApiKey(_) => f.write_str("ApiKey(<redacted>)"),
        }
    }
}

impl Authenticator {
    /// Value of the `Authorization` header, if this scheme uses one.
    pub fn authorization_header(&self) -> Option<String> {
        match self {
            Authenticator::Basic { username, password } => {
                let encoded = base64::engine::general_purpose::STANDARD.encode(format!("{username}:{password}"));
                Some(format!("Basic {encoded}"))
            }
            Authenticator::BearerToken(token) => Some(format!("Bearer {token}")),
            Authenticator::NoAuth | Authenticator::ApiKey(_) => None,
        }
    }
}
