//! Data Dragon (game-data CDN) client.
//!
//! # Responsibilities
//! - Fetch the current game-data version
//! - Fetch the champion roster for a version, sorted by display name
//! - Fetch one champion's detail file
//!
//! # Design Decisions
//! - Version and roster calls do not inspect the status code; a body that
//!   does not parse is a fault
//! - A non-2xx champion file is a normal miss (`Ok(None)`)
//! - Spell slots are read by fixed position, see [`SPELL_SLOTS`]

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

use crate::champions::{self, Abilities, ChampionDetail, ChampionSummary};
use crate::config::UpstreamConfig;
use crate::upstream::{endpoint, send_get, UpstreamError, UpstreamResult};

/// Index of each spell slot in the CDN `spells` array.
pub const SPELL_SLOTS: [(&str, usize); 4] = [("Q", 0), ("W", 1), ("E", 2), ("R", 3)];

/// `data` keeps the CDN's key order (serde_json `preserve_order`).
#[derive(Deserialize)]
struct RosterFile {
    data: Map<String, Value>,
}

#[derive(Deserialize)]
struct RosterEntry {
    key: String,
    id: String,
    name: String,
}

#[derive(Deserialize)]
struct ChampionFile {
    data: HashMap<String, ChampionRecord>,
}

#[derive(Deserialize)]
struct ChampionRecord {
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    stats: BTreeMap<String, f64>,
    passive: NamedAbility,
    spells: Vec<NamedAbility>,
    #[serde(default)]
    partype: String,
}

#[derive(Deserialize)]
struct NamedAbility {
    name: String,
}

/// Client for the public game-data CDN.
#[derive(Clone)]
pub struct GameDataClient {
    client: reqwest::Client,
    base_url: String,
    locale: String,
}

impl GameDataClient {
    pub fn new(client: reqwest::Client, config: &UpstreamConfig) -> Self {
        Self {
            client,
            base_url: config.data_dragon_url.clone(),
            locale: config.locale.clone(),
        }
    }

    /// Directory holding the square champion portraits for `version`.
    pub fn image_base(&self, version: &str) -> String {
        format!("{}/cdn/{}/img/champion", self.base_url.trim_end_matches('/'), version)
    }

    /// Latest game-data version (first entry of the version list).
    pub async fn current_version(&self) -> UpstreamResult<String> {
        let url = endpoint(&self.base_url, &["api", "versions.json"])?;
        let versions: Vec<String> = send_get(&self.client, "versions", url).await?.json().await?;

        versions
            .into_iter()
            .next()
            .ok_or_else(|| UpstreamError::Schema("empty version list".to_string()))
    }

    /// Full roster for `version`, sorted by display name.
    pub async fn champion_catalog(&self, version: &str) -> UpstreamResult<Vec<ChampionSummary>> {
        let url = endpoint(
            &self.base_url,
            &["cdn", version, "data", &self.locale, "champion.json"],
        )?;
        let body: Value = send_get(&self.client, "champion_list", url).await?.json().await?;

        parse_catalog(body)
    }

    /// Detail for one champion, or `None` when the CDN has no such file.
    pub async fn champion_detail(
        &self,
        short_id: &str,
        version: &str,
    ) -> UpstreamResult<Option<ChampionDetail>> {
        let file_name = format!("{}.json", short_id);
        let url = endpoint(
            &self.base_url,
            &["cdn", version, "data", &self.locale, "champion", &file_name],
        )?;
        let response = send_get(&self.client, "champion_detail", url).await?;

        if !response.status().is_success() {
            tracing::info!(short_id = %short_id, status = %response.status(), "Champion detail not available");
            return Ok(None);
        }

        let body: Value = response.json().await?;
        parse_champion_detail(short_id, body)
    }
}

/// Turn a `champion.json` body into a sorted roster.
pub fn parse_catalog(body: Value) -> UpstreamResult<Vec<ChampionSummary>> {
    let file: RosterFile = serde_json::from_value(body)
        .map_err(|e| UpstreamError::Schema(format!("champion list: {}", e)))?;

    let mut roster = Vec::with_capacity(file.data.len());
    for (slug, entry) in file.data {
        let entry: RosterEntry = serde_json::from_value(entry)
            .map_err(|e| UpstreamError::Schema(format!("champion list entry {}: {}", slug, e)))?;
        roster.push(ChampionSummary {
            key: entry.key,
            short_id: entry.id,
            display_name: entry.name,
        });
    }
    // Stable, so equal names keep the CDN order
    champions::sort_by_display_name(&mut roster);

    Ok(roster)
}

/// Turn a `champion/{short_id}.json` body into a detail view.
///
/// Returns `None` when the file has no record for `short_id`.
pub fn parse_champion_detail(short_id: &str, body: Value) -> UpstreamResult<Option<ChampionDetail>> {
    let mut file: ChampionFile = serde_json::from_value(body)
        .map_err(|e| UpstreamError::Schema(format!("champion {}: {}", short_id, e)))?;

    let Some(record) = file.data.remove(short_id) else {
        tracing::warn!(short_id = %short_id, "Champion file has no matching record");
        return Ok(None);
    };

    let spell = |slot: usize| -> UpstreamResult<String> {
        let (label, index) = SPELL_SLOTS[slot];
        record
            .spells
            .get(index)
            .map(|s| s.name.clone())
            .ok_or_else(|| UpstreamError::Schema(format!("champion {} has no {} spell", short_id, label)))
    };

    let abilities = Abilities {
        passive: record.passive.name.clone(),
        q: spell(0)?,
        w: spell(1)?,
        e: spell(2)?,
        r: spell(3)?,
    };

    Ok(Some(ChampionDetail {
        tags: record.tags,
        stats: record.stats,
        abilities,
        resource_type: record.partype,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ahri_file() -> Value {
        json!({
            "type": "champion",
            "data": {
                "Ahri": {
                    "id": "Ahri",
                    "key": "103",
                    "name": "Ahri",
                    "tags": ["Mage", "Assassin"],
                    "partype": "Mana",
                    "stats": { "hp": 590, "hpperlevel": 104, "movespeed": 330, "attackrange": 550.0 },
                    "passive": { "name": "Essence Theft" },
                    "spells": [
                        { "id": "AhriQ", "name": "Orb of Deception" },
                        { "id": "AhriW", "name": "Fox-Fire" },
                        { "id": "AhriE", "name": "Charm" },
                        { "id": "AhriR", "name": "Spirit Rush" }
                    ]
                }
            }
        })
    }

    #[test]
    fn test_parse_catalog_sorts_by_name() {
        let body = json!({
            "data": {
                "MonkeyKing": { "key": "62", "id": "MonkeyKing", "name": "Wukong", "title": "the Monkey King" },
                "Ahri": { "key": "103", "id": "Ahri", "name": "Ahri" },
                "Kayle": { "key": "10", "id": "Kayle", "name": "Kayle" },
                "Chogath": { "key": "31", "id": "Chogath", "name": "Cho'Gath" }
            }
        });
        let roster = parse_catalog(body).unwrap();
        let names: Vec<_> = roster.iter().map(|c| c.display_name.as_str()).collect();
        assert_eq!(names, vec!["Ahri", "Cho'Gath", "Kayle", "Wukong"]);
        assert_eq!(roster[3].short_id, "MonkeyKing");
        assert_eq!(roster[3].key, "62");
    }

    #[test]
    fn test_parse_catalog_ties_keep_upstream_order() {
        let body: Value = serde_json::from_str(
            r#"{"data": {
                "Zeta": { "key": "2", "id": "Zeta", "name": "Twin" },
                "Alpha": { "key": "1", "id": "Alpha", "name": "Twin" },
                "Ahri": { "key": "103", "id": "Ahri", "name": "Ahri" }
            }}"#,
        )
        .unwrap();
        let roster = parse_catalog(body).unwrap();
        let ids: Vec<_> = roster.iter().map(|c| c.short_id.as_str()).collect();
        assert_eq!(ids, vec!["Ahri", "Zeta", "Alpha"]);
    }

    #[test]
    fn test_parse_catalog_bad_entry_is_fault() {
        let body = json!({ "data": { "Ahri": { "id": "Ahri", "name": "Ahri" } } });
        let err = parse_catalog(body).unwrap_err();
        assert!(err.to_string().contains("Ahri"), "{}", err);
    }

    #[test]
    fn test_parse_catalog_rejects_garbage() {
        assert!(matches!(parse_catalog(json!({"status": 403})), Err(UpstreamError::Schema(_))));
        assert!(matches!(parse_catalog(json!(["14.1.1"])), Err(UpstreamError::Schema(_))));
    }

    #[test]
    fn test_parse_detail() {
        let detail = parse_champion_detail("Ahri", ahri_file()).unwrap().unwrap();
        assert_eq!(detail.tags, vec!["Mage", "Assassin"]);
        assert_eq!(detail.resource_type, "Mana");
        assert_eq!(detail.stats["hp"], 590.0);
        assert_eq!(detail.stats["attackrange"], 550.0);
        assert_eq!(detail.abilities.passive, "Essence Theft");
        assert_eq!(detail.abilities.q, "Orb of Deception");
        assert_eq!(detail.abilities.w, "Fox-Fire");
        assert_eq!(detail.abilities.e, "Charm");
        assert_eq!(detail.abilities.r, "Spirit Rush");
    }

    #[test]
    fn test_parse_detail_optional_fields_default() {
        let body = json!({
            "data": {
                "Garen": {
                    "passive": { "name": "Perseverance" },
                    "spells": [
                        { "name": "Decisive Strike" },
                        { "name": "Courage" },
                        { "name": "Judgment" },
                        { "name": "Demacian Justice" }
                    ]
                }
            }
        });
        let detail = parse_champion_detail("Garen", body).unwrap().unwrap();
        assert!(detail.tags.is_empty());
        assert!(detail.stats.is_empty());
        assert_eq!(detail.resource_type, "");
    }

    #[test]
    fn test_parse_detail_missing_record() {
        assert_eq!(parse_champion_detail("Zed", ahri_file()).unwrap(), None);
    }

    #[test]
    fn test_parse_detail_short_spell_list_is_fault() {
        let mut body = ahri_file();
        body["data"]["Ahri"]["spells"].as_array_mut().unwrap().truncate(3);
        let err = parse_champion_detail("Ahri", body).unwrap_err();
        assert!(err.to_string().contains("no R spell"), "{}", err);
    }

    #[test]
    fn test_parse_detail_missing_passive_is_fault() {
        let mut body = ahri_file();
        body["data"]["Ahri"].as_object_mut().unwrap().remove("passive");
        assert!(matches!(parse_champion_detail("Ahri", body), Err(UpstreamError::Schema(_))));
    }
}
