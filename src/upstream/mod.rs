//! Upstream API clients.
//!
//! # Data Flow
//! ```text
//! handler
//!     → game_data.rs (Data Dragon CDN: versions, roster, champion files)
//!     → player.rs    (Riot API: account by Riot ID, champion mastery)
//!     → reqwest::Client (shared connection pool, timeouts)
//! ```
//!
//! # Design Decisions
//! - Nothing is cached; every call hits the network
//! - No retries; a transport failure is returned to the caller as-is
//! - Absent results are `Ok(None)`, faults are `Err(UpstreamError)`

pub mod game_data;
pub mod player;

pub use game_data::GameDataClient;
pub use player::{PlayerClient, PlayerId};

use std::time::{Duration, Instant};
use thiserror::Error;
use url::Url;

use crate::config::{TimeoutConfig, UpstreamConfig};
use crate::observability::metrics;

/// Errors that can occur while talking to an upstream API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection, timeout, or body decoding failure.
    #[error("upstream transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A request URL could not be assembled.
    #[error("invalid upstream URL: {0}")]
    InvalidUrl(String),

    /// The response parsed but broke the expected shape.
    #[error("unexpected upstream payload: {0}")]
    Schema(String),
}

pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// Build the shared HTTP client for all upstream calls.
pub fn build_http_client(
    upstream: &UpstreamConfig,
    timeouts: &TimeoutConfig,
) -> UpstreamResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .user_agent(concat!("champ-mastery/", env!("CARGO_PKG_VERSION")))
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .timeout(Duration::from_secs(timeouts.upstream_secs));

    if !upstream.use_system_proxy {
        builder = builder.no_proxy();
    }

    Ok(builder.build()?)
}

/// Append percent-encoded path segments to `base`.
pub(crate) fn endpoint(base: &str, segments: &[&str]) -> UpstreamResult<Url> {
    let mut url = Url::parse(base)
        .map_err(|e| UpstreamError::InvalidUrl(format!("{}: {}", base, e)))?;

    url.path_segments_mut()
        .map_err(|_| UpstreamError::InvalidUrl(format!("{}: cannot be a base", base)))?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

/// Send a GET and record its outcome under `endpoint_name`.
pub(crate) async fn send_get(
    client: &reqwest::Client,
    endpoint_name: &'static str,
    url: Url,
) -> UpstreamResult<reqwest::Response> {
    let start = Instant::now();
    match client.get(url).send().await {
        Ok(response) => {
            metrics::record_upstream(endpoint_name, Some(response.status().as_u16()), start);
            tracing::debug!(endpoint = endpoint_name, status = %response.status(), "Upstream responded");
            Ok(response)
        }
        Err(e) => {
            metrics::record_upstream(endpoint_name, None, start);
            // without_url keeps the API key out of the logs
            let e = e.without_url();
            tracing::error!(endpoint = endpoint_name, error = %e, "Upstream request failed");
            Err(UpstreamError::Transport(e))
        }
    }
}
