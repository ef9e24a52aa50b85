//! Champion data model.
//!
//! # Responsibilities
//! - Define the roster entry (`ChampionSummary`) and detail view (`ChampionDetail`)
//! - Keep the roster ordered by display name
//! - Filter the roster by a case-insensitive name query
//!
//! # Design Decisions
//! - Roster order is a plain ordinal comparison of display names
//! - Ability slots are a named struct, never positional indexing

use serde::Serialize;
use std::collections::BTreeMap;

/// One roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChampionSummary {
    /// Numeric champion key, as sent by the CDN (e.g. `"103"`).
    pub key: String,
    /// Slug used in CDN file names (e.g. `"Ahri"`, `"MonkeyKing"`).
    pub short_id: String,
    /// Human readable name (e.g. `"Wukong"`).
    pub display_name: String,
}

/// Names of a champion's passive and four spells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Abilities {
    pub passive: String,
    pub q: String,
    pub w: String,
    pub e: String,
    pub r: String,
}

impl Abilities {
    /// Slot label and ability name, in display order.
    pub fn slots(&self) -> [(&'static str, &str); 5] {
        [
            ("Passive", &self.passive),
            ("Q", &self.q),
            ("W", &self.w),
            ("E", &self.e),
            ("R", &self.r),
        ]
    }
}

/// Detail view of a single champion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChampionDetail {
    pub tags: Vec<String>,
    pub stats: BTreeMap<String, f64>,
    pub abilities: Abilities,
    /// Resource bar label (`"Mana"`, `"Energy"`, ...). Empty when the CDN omits it.
    pub resource_type: String,
}

/// Sort a roster ascending by display name.
///
/// The sort is stable, so exact duplicate names keep their input order.
pub fn sort_by_display_name(champions: &mut [ChampionSummary]) {
    champions.sort_by(|a, b| a.display_name.cmp(&b.display_name));
}

/// Entries whose display name contains `query`, ignoring case.
///
/// Relative order is preserved and an empty query matches everything.
pub fn search<'a>(
    champions: impl IntoIterator<Item = &'a ChampionSummary>,
    query: &str,
) -> Vec<ChampionSummary> {
    let needle = query.to_lowercase();
    champions
        .into_iter()
        .filter(|c| c.display_name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn champ(key: &str, short_id: &str, name: &str) -> ChampionSummary {
        ChampionSummary {
            key: key.into(),
            short_id: short_id.into(),
            display_name: name.into(),
        }
    }

    fn roster() -> Vec<ChampionSummary> {
        let mut roster = vec![
            champ("35", "Shaco", "Shaco"),
            champ("103", "Ahri", "Ahri"),
            champ("10", "Kayle", "Kayle"),
            champ("62", "MonkeyKing", "Wukong"),
            champ("31", "Chogath", "Cho'Gath"),
        ];
        sort_by_display_name(&mut roster);
        roster
    }

    #[test]
    fn test_sorted_by_display_name() {
        let names: Vec<_> = roster().into_iter().map(|c| c.display_name).collect();
        assert_eq!(names, vec!["Ahri", "Cho'Gath", "Kayle", "Shaco", "Wukong"]);
    }

    #[test]
    fn test_sort_is_ordinal_and_stable() {
        let mut champions = vec![
            champ("2", "b", "b"),
            champ("1", "Z", "Z"),
            champ("3", "first", "Same"),
            champ("4", "second", "Same"),
        ];
        sort_by_display_name(&mut champions);
        let ids: Vec<_> = champions.iter().map(|c| c.short_id.as_str()).collect();
        // Uppercase sorts before lowercase in ordinal comparison
        assert_eq!(ids, vec!["first", "second", "Z", "b"]);
    }

    #[test]
    fn test_search_ah() {
        let champions = vec![
            champ("103", "Ahri", "Ahri"),
            champ("10", "Kayle", "Kayle"),
            champ("35", "Shaco", "Shaco"),
        ];
        let names: Vec<_> = search(&champions, "ah")
            .into_iter()
            .map(|c| c.display_name)
            .collect();
        assert_eq!(names, vec!["Ahri"]);
    }

    #[test]
    fn test_search_is_case_insensitive_both_ways() {
        let roster = roster();
        assert_eq!(search(&roster, "AHRI").len(), 1);
        assert_eq!(search(&roster, "gath")[0].short_id, "Chogath");
        assert_eq!(search(&roster, "SHAco")[0].display_name, "Shaco");
    }

    #[test]
    fn test_search_matches_display_name_only() {
        let roster = roster();
        // "MonkeyKing" is the slug, "62" the key; neither should match
        assert!(search(&roster, "monkey").is_empty());
        assert!(search(&roster, "62").is_empty());
        assert_eq!(search(&roster, "wu").len(), 1);
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let roster = roster();
        assert_eq!(search(&roster, ""), roster);
    }

    #[test]
    fn test_search_is_subsequence() {
        let roster = roster();
        let hits = search(&roster, "a");
        let mut cursor = roster.iter();
        for hit in &hits {
            assert!(cursor.any(|c| c == hit), "{} out of order", hit.display_name);
        }
        assert_eq!(hits.len(), 4);
    }

    #[test]
    fn test_ability_slots() {
        let abilities = Abilities {
            passive: "Essence Theft".into(),
            q: "Orb of Deception".into(),
            w: "Fox-Fire".into(),
            e: "Charm".into(),
            r: "Spirit Rush".into(),
        };
        let labels: Vec<_> = abilities.slots().iter().map(|(slot, _)| *slot).collect();
        assert_eq!(labels, vec!["Passive", "Q", "W", "E", "R"]);
        assert_eq!(abilities.slots()[4].1, "Spirit Rush");
    }
}
