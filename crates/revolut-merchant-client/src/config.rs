//! Client configuration.

use std::fmt;
use std::time::Duration;

use crate::error::ClientError;

/// Production Merchant API URL.
pub const PRODUCTION_URL: &str = "https://merchant.revolut.com";

/// Sandbox Merchant API URL.
pub const SANDBOX_URL: &str = "https://sandbox-merchant.revolut.com";

/// Merchant API version sent in the `Revolut-Api-Version` header.
pub const API_VERSION: &str = "2024-09-01";

/// Which Revolut environment to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Live merchant account.
    #[default]
    Production,
    /// Sandbox merchant account.
    Sandbox,
}

impl Environment {
    /// Base URL of the environment.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_URL,
            Self::Sandbox => SANDBOX_URL,
        }
    }
}

/// Configuration for a [`Client`](crate::Client).
#[derive(Clone)]
pub struct ClientConfig {
    /// Merchant API secret key.
    pub secret_key: String,

    /// Target environment (default: production).
    pub environment: Environment,

    /// Overrides the environment's base URL (tests, proxies).
    pub base_url: Option<String>,

    /// API version header value (default: [`API_VERSION`]).
    pub api_version: String,

    /// Request timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a production configuration for `secret_key`.
    #[must_use]
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            environment: Environment::Production,
            base_url: None,
            api_version: API_VERSION.to_string(),
            timeout: None,
        }
    }

    /// Select the sandbox (`true`) or production (`false`) environment.
    #[must_use]
    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.environment = if sandbox {
            Environment::Sandbox
        } else {
            Environment::Production
        };
        self
    }

    /// Override the base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API version header value.
    #[must_use]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set a request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The base URL requests are sent to, without a trailing slash.
    #[must_use]
    pub fn resolved_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
            .trim_end_matches('/')
    }

    /// Load configuration from environment variables.
    ///
    /// | Variable | Meaning |
    /// |---|---|
    /// | `REVOLUT_SECRET_KEY` | secret key (required) |
    /// | `REVOLUT_SANDBOX` | `true`/`1`/`yes` selects the sandbox |
    /// | `REVOLUT_BASE_URL` | base URL override |
    /// | `REVOLUT_API_VERSION` | API version override |
    /// | `REVOLUT_TIMEOUT_SECONDS` | request timeout |
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the secret key is missing or a
    /// value cannot be parsed.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let secret_key = lookup("REVOLUT_SECRET_KEY")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ClientError::Configuration("REVOLUT_SECRET_KEY is not set".into()))?;

        let sandbox = lookup("REVOLUT_SANDBOX").is_some_and(|v| {
            matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
        });

        let mut config = Self::new(secret_key).sandbox(sandbox);

        if let Some(url) = lookup("REVOLUT_BASE_URL") {
            config = config.with_base_url(url);
        }
        if let Some(version) = lookup("REVOLUT_API_VERSION") {
            config = config.with_api_version(version);
        }
        if let Some(raw) = lookup("REVOLUT_TIMEOUT_SECONDS") {
            let seconds: u64 = raw.trim().parse().map_err(|_| {
                ClientError::Configuration(format!("invalid REVOLUT_TIMEOUT_SECONDS: {raw}"))
            })?;
            config = config.with_timeout(Duration::from_secs(seconds));
        }

        tracing::debug!(
            environment = ?config.environment,
            base_url = %config.resolved_base_url(),
            "Loaded Revolut client configuration"
        );

        Ok(config)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("secret_key", &"<redacted>")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .finish()
    }
}
