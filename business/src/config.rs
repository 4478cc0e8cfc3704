use std::env::vars;
use std::time::Duration;

use log::info;
use serde::Deserialize;
use ustr::Ustr;

use crate::toast::DEFAULT_TOAST_LIFETIME;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read configuration from the environment: {0}")]
    Env(#[from] serde_env::Error),
    #[error("DORMMEAL_API_BASE_URL must not be empty")]
    EmptyBaseUrl,
    #[error("DORMMEAL_REQUEST_TIMEOUT_SECS must be greater than zero")]
    ZeroTimeout,
    #[error("DORMMEAL_TOAST_SECS must be greater than zero")]
    ZeroToastLifetime,
}

#[derive(Debug, Clone)]
pub struct BusinessConfig {
    pub api_base_url: String,
    /// Sent as `Authorization: Bearer <token>` on every user API call when set.
    pub auth_token: Option<String>,
    pub request_timeout: Duration,
    pub toast_lifetime: Duration,
}

// Environment overrides, all optional.
#[derive(Debug, Default, Deserialize)]
pub struct RawConfig {
    dormmeal_api_base_url: Option<String>,
    dormmeal_auth_token: Option<String>,
    dormmeal_request_timeout_secs: Option<u64>,
    dormmeal_toast_secs: Option<u64>,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn api_url(&self) -> Ustr {
        if self.api_base_url.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(&format!(
                "{}/api",
                self.api_base_url.trim_end_matches('/')
            ))
        }
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    /// Loads `.env` if present, then applies `DORMMEAL_*` overrides on top of
    /// the build-time defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded environment from {}", path.display()),
            Err(err) if err.not_found() => {}
            Err(err) => log::warn!("Ignoring unreadable .env file: {err}"),
        }

        let raw: RawConfig = serde_env::from_iter(vars())?;
        Self::from_raw(raw)
    }

    pub fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let RawConfig {
            dormmeal_api_base_url,
            dormmeal_auth_token,
            dormmeal_request_timeout_secs,
            dormmeal_toast_secs,
        } = raw;

        let mut config = Self::default();

        if let Some(base_url) = dormmeal_api_base_url {
            let base_url = base_url.trim();
            if base_url.is_empty() {
                return Err(ConfigError::EmptyBaseUrl);
            }
            info!("Using provided DORMMEAL_API_BASE_URL: {base_url}");
            config.api_base_url = base_url.to_string();
        }

        config.auth_token = dormmeal_auth_token.filter(|token| !token.trim().is_empty());

        match dormmeal_request_timeout_secs {
            Some(0) => return Err(ConfigError::ZeroTimeout),
            Some(secs) => config.request_timeout = Duration::from_secs(secs),
            None => {}
        }

        match dormmeal_toast_secs {
            Some(0) => return Err(ConfigError::ZeroToastLifetime),
            Some(secs) => config.toast_lifetime = Duration::from_secs(secs),
            None => {}
        }

        Ok(config)
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: if cfg!(feature = "env_test") {
                "https://dormmeal-test.campus-dining.net".to_string()
            } else if cfg!(feature = "env_internal") {
                "https://dormmeal-internal.campus-dining.net".to_string()
            } else if cfg!(feature = "env_nightly") {
                "https://dormmeal-nightly.campus-dining.net".to_string()
            } else {
                "https://dormmeal.campus-dining.net".to_string()
            },
            auth_token: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            toast_lifetime: DEFAULT_TOAST_LIFETIME,
        }
    }
}
