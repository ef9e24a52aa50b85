//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses and URLs parse
//! - Validate value ranges (timeouts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use thiserror::Error;
use url::Url;

use crate::config::schema::AppConfig;
use crate::upstream::player::HOST_PLACEHOLDER;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("riot.api_key is empty (set RIOT_API_KEY)")]
    MissingApiKey,

    #[error("{field} is not a socket address: {value}")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{field} is not a valid URL: {value}")]
    InvalidUrl { field: &'static str, value: String },

    #[error("{field} must be greater than zero")]
    ZeroTimeout { field: &'static str },

    #[error("session.cookie_name is empty")]
    EmptyCookieName,
}

/// Validate a parsed configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.riot.api_key.trim().is_empty() {
        errors.push(ValidationError::MissingApiKey);
    }

    check_address(&mut errors, "listener.bind_address", &config.listener.bind_address);
    if config.observability.metrics_enabled {
        check_address(&mut errors, "observability.metrics_address", &config.observability.metrics_address);
    }

    check_url(&mut errors, "upstream.data_dragon_url", &config.upstream.data_dragon_url);
    // Any host label will do; "americas" is a real one
    let riot_sample = config.upstream.riot_api_url.replace(HOST_PLACEHOLDER, "americas");
    if !is_base_url(&riot_sample) {
        errors.push(ValidationError::InvalidUrl {
            field: "upstream.riot_api_url",
            value: config.upstream.riot_api_url.clone(),
        });
    }

    for (field, secs) in [
        ("timeouts.request_secs", config.timeouts.request_secs),
        ("timeouts.upstream_secs", config.timeouts.upstream_secs),
        ("timeouts.connect_secs", config.timeouts.connect_secs),
        ("session.ttl_secs", config.session.ttl_secs),
        ("session.sweep_interval_secs", config.session.sweep_interval_secs),
    ] {
        if secs == 0 {
            errors.push(ValidationError::ZeroTimeout { field });
        }
    }

    if config.session.cookie_name.trim().is_empty() {
        errors.push(ValidationError::EmptyCookieName);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}

fn check_url(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if !is_base_url(value) {
        errors.push(ValidationError::InvalidUrl {
            field,
            value: value.to_string(),
        });
    }
}

fn is_base_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| !url.cannot_be_a_base() && matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}
