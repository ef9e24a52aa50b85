//! Platform to routing-region resolution.
//!
//! # Responsibilities
//! - Hold the fixed table of routing regions and their platform shards
//! - Map a platform code to the region whose account host resolves Riot IDs
//!
//! # Design Decisions
//! - Unknown platform codes resolve to `None`, never an error
//! - Matching is exact (platform codes are lowercase on the wire)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse routing region used for account lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Americas,
    Asia,
    Europe,
}

/// Region table: each region with its member platform codes.
pub const REGION_TABLE: [(Region, &[&str]); 3] = [
    (Region::Americas, &["br1", "la1", "la2", "na1"]),
    (Region::Asia, &["jp1", "kr", "oc1", "ph2", "sg2", "th2", "tw2", "vn2"]),
    (Region::Europe, &["eun1", "euw1", "tr1", "ru"]),
];

impl Region {
    /// Host label used in `https://{region}.api.riotgames.com`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Americas => "americas",
            Region::Asia => "asia",
            Region::Europe => "europe",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve a platform code to its routing region.
pub fn resolve(platform_code: &str) -> Option<Region> {
    REGION_TABLE
        .iter()
        .find(|(_, platforms)| platforms.contains(&platform_code))
        .map(|(region, _)| *region)
}

/// All known platform codes, in table order.
pub fn platform_codes() -> impl Iterator<Item = &'static str> {
    REGION_TABLE
        .iter()
        .flat_map(|(_, platforms)| platforms.iter().copied())
}
