//! Process configuration from environment variables.
//!
//! `main` runs `dotenvy::dotenv()` before anything reads the environment,
//! so a local `.env` file works the same as exported variables.

use std::env;
use std::time::Duration;

use thiserror::Error;

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Default number of key-allocation rounds before giving up.
const DEFAULT_KEY_RETRIES: u32 = 3;
/// Default first backoff delay in milliseconds; doubles per round.
const DEFAULT_RETRY_BASE_MS: u64 = 100;

/// Which document store adapter to run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// The hosted database over HTTP (the default).
    Http,
    /// The in-process store; state lives for one invocation.
    Memory,
}

/// Everything the process reads from its environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Selected store adapter (`LADLE_STORE`, `http` or `memory`).
    pub store: StoreKind,
    /// Base URL of the hosted store (`LADLE_STORE_URL`; required for `http`).
    pub store_url: Option<String>,
    /// Bearer token for the hosted store (`LADLE_API_KEY`).
    pub api_key: Option<String>,
    /// Identity all operations act as (`LADLE_USER`).
    pub user_id: String,
    /// Webhook for mutation events (`LADLE_NOTIFY_URL`; optional).
    pub notify_url: Option<String>,
    /// Network timeout per store call (`LADLE_TIMEOUT_SECS`).
    pub request_timeout: Duration,
    /// Key-allocation rounds before surfacing a conflict (`LADLE_KEY_RETRIES`).
    pub key_retries: u32,
    /// First backoff delay between rounds (`LADLE_RETRY_BASE_MS`).
    pub retry_base_delay: Duration,
}

/// Failure to assemble a [`Config`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required variable is absent.
    #[error("{0} is not set")]
    Missing(&'static str),
    /// A variable is present but unusable.
    #[error("{var} has invalid value {value:?}: {reason}")]
    Invalid {
        /// Variable name.
        var: &'static str,
        /// The offending value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for missing or malformed variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Reads configuration through the given variable lookup.
    ///
    /// The seam exists so tests can supply variables without mutating the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for missing or malformed variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let store = match lookup("LADLE_STORE").as_deref() {
            None | Some("http") => StoreKind::Http,
            Some("memory") => StoreKind::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "LADLE_STORE",
                    value: other.to_string(),
                    reason: "expected \"http\" or \"memory\"".to_string(),
                })
            }
        };

        let store_url = lookup("LADLE_STORE_URL");
        if store == StoreKind::Http && store_url.is_none() {
            return Err(ConfigError::Missing("LADLE_STORE_URL"));
        }

        let user_id = lookup("LADLE_USER").ok_or(ConfigError::Missing("LADLE_USER"))?;
        if user_id.is_empty() {
            return Err(ConfigError::Invalid {
                var: "LADLE_USER",
                value: user_id,
                reason: "must not be empty".to_string(),
            });
        }

        let timeout_secs =
            parse_or("LADLE_TIMEOUT_SECS", &lookup, DEFAULT_TIMEOUT_SECS)?;
        let key_retries = parse_or("LADLE_KEY_RETRIES", &lookup, DEFAULT_KEY_RETRIES)?;
        let retry_base_ms = parse_or("LADLE_RETRY_BASE_MS", &lookup, DEFAULT_RETRY_BASE_MS)?;

        Ok(Self {
            store,
            store_url,
            api_key: lookup("LADLE_API_KEY"),
            user_id,
            notify_url: lookup("LADLE_NOTIFY_URL"),
            request_timeout: Duration::from_secs(timeout_secs),
            key_retries,
            retry_base_delay: Duration::from_millis(retry_base_ms),
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    var: &'static str,
    lookup: impl Fn(&str) -> Option<String>,
    default: T,
) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            value: raw,
            reason: e.to_string(),
        }),
    }
}
