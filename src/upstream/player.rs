//! Riot API client for account and mastery lookups.
//!
//! # Responsibilities
//! - Resolve a Riot ID (name + tagline) to a PUUID via the regional account host
//! - Look up one champion's mastery level via the platform host
//!
//! # Design Decisions
//! - Identity lookups go to the *region* host, mastery lookups to the
//!   *platform* host
//! - Any non-200 answer collapses to `None`; "not found" and "upstream
//!   error" are not told apart
//! - The API key travels as the `api_key` query parameter and is never logged

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{RiotConfig, UpstreamConfig};
use crate::region::{self, Region};
use crate::upstream::{endpoint, send_get, UpstreamResult};

/// Placeholder in the configured Riot API URL replaced by the host label.
pub const HOST_PLACEHOLDER: &str = "{host}";

/// Opaque player identifier (PUUID).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub String);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize)]
struct AccountResponse {
    puuid: Option<String>,
}

#[derive(Deserialize)]
struct MasteryResponse {
    #[serde(rename = "championLevel")]
    champion_level: Option<i64>,
}

/// Client for the authenticated Riot API.
#[derive(Clone)]
pub struct PlayerClient {
    client: reqwest::Client,
    url_template: String,
    api_key: String,
}

impl PlayerClient {
    pub fn new(client: reqwest::Client, upstream: &UpstreamConfig, riot: &RiotConfig) -> Self {
        Self {
            client,
            url_template: upstream.riot_api_url.clone(),
            api_key: riot.api_key.clone(),
        }
    }

    fn host_url(&self, host: &str) -> String {
        self.url_template.replace(HOST_PLACEHOLDER, host)
    }

    /// Resolve a Riot ID on the region serving `platform_code`.
    ///
    /// Returns `None` without touching the network when the platform code is
    /// unknown, and `None` for any non-200 answer.
    pub async fn resolve_identity(
        &self,
        name: &str,
        tagline: &str,
        platform_code: &str,
    ) -> UpstreamResult<Option<(PlayerId, Region)>> {
        let Some(region) = region::resolve(platform_code) else {
            tracing::info!(platform = %platform_code, "Unknown platform code, skipping account lookup");
            return Ok(None);
        };

        let mut url = endpoint(
            &self.host_url(region.as_str()),
            &["riot", "account", "v1", "accounts", "by-riot-id", name, tagline],
        )?;
        url.query_pairs_mut().append_pair("api_key", &self.api_key);

        let response = send_get(&self.client, "account", url).await?;
        if response.status() != reqwest::StatusCode::OK {
            tracing::info!(region = %region, status = %response.status(), "Riot ID did not resolve");
            return Ok(None);
        }

        let account: AccountResponse = response.json().await?;
        Ok(account.puuid.map(|puuid| (PlayerId(puuid), region)))
    }

    /// Mastery level of `player` on `champion_key`, or `None` when the API
    /// has no answer.
    pub async fn mastery_level(
        &self,
        player: &PlayerId,
        platform_code: &str,
        champion_key: &str,
    ) -> UpstreamResult<Option<i64>> {
        let mut url = endpoint(
            &self.host_url(platform_code),
            &[
                "lol",
                "champion-mastery",
                "v4",
                "champion-masteries",
                "by-puuid",
                &player.0,
                "by-champion",
                champion_key,
            ],
        )?;
        url.query_pairs_mut().append_pair("api_key", &self.api_key);

        let response = send_get(&self.client, "mastery", url).await?;
        if response.status() != reqwest::StatusCode::OK {
            tracing::debug!(platform = %platform_code, status = %response.status(), "No mastery record");
            return Ok(None);
        }

        let mastery: MasteryResponse = response.json().await?;
        Ok(mastery.champion_level)
    }
}
