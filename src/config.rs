// src/config.rs
use crate::infrastructure::{TracingRequestLogSink, UuidRequestLogIdGenerator};
use std::env;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestLogConfig {
    log_filter: String,
    sink_enabled: bool,
    id_prefix: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_log_filter() -> String {
    "info".into()
}

impl Default for RequestLogConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            sink_enabled: true,
            id_prefix: None,
        }
    }
}

impl RequestLogConfig {
    /// Build configuration from environment variables, loading a `.env` file
    /// first when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same parsing as [`from_env`](Self::from_env) against an arbitrary key
    /// lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup("RUST_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_log_filter);

        let sink_enabled = match lookup("REQUEST_LOG_ENABLED") {
            None => true,
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "REQUEST_LOG_ENABLED must be true or false, got '{raw}'"
                ))
            })?,
        };

        let id_prefix = match lookup("REQUEST_LOG_ID_PREFIX") {
            Some(prefix) if prefix.chars().any(char::is_whitespace) => {
                return Err(ConfigError::Invalid(
                    "REQUEST_LOG_ID_PREFIX must not contain whitespace".into(),
                ));
            }
            Some(prefix) if !prefix.is_empty() => Some(prefix),
            _ => None,
        };

        Ok(Self {
            log_filter,
            sink_enabled,
            id_prefix,
        })
    }

    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    pub fn sink_enabled(&self) -> bool {
        self.sink_enabled
    }

    pub fn id_prefix(&self) -> Option<&str> {
        self.id_prefix.as_deref()
    }

    pub fn id_generator(&self) -> UuidRequestLogIdGenerator {
        match &self.id_prefix {
            Some(prefix) => UuidRequestLogIdGenerator::with_prefix(prefix.clone()),
            None => UuidRequestLogIdGenerator::new(),
        }
    }

    pub fn sink(&self) -> TracingRequestLogSink {
        TracingRequestLogSink::new(self.sink_enabled)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}
