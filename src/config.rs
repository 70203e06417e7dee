// src/config.rs
use crate::infrastructure::wikimedia::{DEFAULT_BASE_URL, DEFAULT_PROJECT};
use reqwest::Url;
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    upstream_base_url: String,
    wiki_project: String,
    upstream_user_agent: String,
    upstream_timeout: Duration,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:3000".into()
}

fn default_user_agent() -> String {
    format!("pageview-stats/{}", env!("CARGO_PKG_VERSION"))
}

const fn default_upstream_timeout_secs() -> u64 {
    30
}

fn default_allowed_origins() -> Vec<String> {
    vec!["*".into()]
}

fn non_empty_var(key: &'static str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl AppConfig {
    /// Build configuration from environment variables. Every key is optional;
    /// values that are present must be valid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_addr = non_empty_var("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let upstream_base_url =
            non_empty_var("UPSTREAM_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let parsed = Url::parse(&upstream_base_url).map_err(|err| {
            ConfigError::Invalid(format!("UPSTREAM_BASE_URL is not a valid url: {err}"))
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ConfigError::Invalid(
                "UPSTREAM_BASE_URL must be an http(s) base url".into(),
            ));
        }

        let wiki_project = match env::var("WIKI_PROJECT") {
            Ok(value) if value.trim().is_empty() => {
                return Err(ConfigError::Invalid("WIKI_PROJECT cannot be empty".into()));
            }
            Ok(value) => value.trim().to_string(),
            Err(_) => DEFAULT_PROJECT.to_string(),
        };

        let upstream_user_agent =
            non_empty_var("UPSTREAM_USER_AGENT").unwrap_or_else(default_user_agent);

        let upstream_timeout_secs = match non_empty_var("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    ConfigError::Invalid(format!(
                        "UPSTREAM_TIMEOUT_SECS must be a positive integer, got {raw}"
                    ))
                })?,
            None => default_upstream_timeout_secs(),
        };

        let allowed_origins = non_empty_var("ALLOWED_ORIGINS")
            .map(|s| s.split(',').map(|p| p.trim().to_string()).collect())
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            listen_addr,
            upstream_base_url,
            wiki_project,
            upstream_user_agent,
            upstream_timeout: Duration::from_secs(upstream_timeout_secs),
            allowed_origins,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn upstream_base_url(&self) -> &str {
        &self.upstream_base_url
    }

    pub fn wiki_project(&self) -> &str {
        &self.wiki_project
    }

    pub fn upstream_user_agent(&self) -> &str {
        &self.upstream_user_agent
    }

    pub const fn upstream_timeout(&self) -> Duration {
        self.upstream_timeout
    }

    /// Allowed CORS origins; `*` allows any origin.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}
