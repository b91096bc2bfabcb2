//! Per-player aggregate state and the first-seen-ordered player table.

use std::collections::BTreeMap;

use fraglog_rules::WeaponId;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Running statistics for one player.
///
/// Created zeroed the first time the player's name appears in a classified
/// event; mutated only during the single aggregation pass. Serialized field
/// names keep the camelCase wire contract of the report consumers, with
/// unset annotation side channels omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStat {
    pub kills: u32,
    pub deaths: u32,
    pub suicides: u32,
    pub telefrags: u32,
    pub grenade_kills: u32,
    pub blaster_kills: u32,
    /// Victim name → kills of that victim. Values sum to `kills`.
    pub kill_breakdown: BTreeMap<String, u32>,
    /// Weapon → kills with it. Values sum to `kills`.
    pub weapon_kills_breakdown: BTreeMap<WeaponId, u32>,
    /// Longest consecutive-attribution run observed for this player.
    pub event_streak: u32,
    /// Non-game lines whose text starts with this player's name.
    pub chats: Vec<String>,
    /// Incremented for every non-game line whether or not it prefix-matched
    /// this player. Report consumers expect the inflated figure; do not
    /// reconcile it with `chats`.
    pub chat_count: u32,
    /// Assigned, never incremented, by quad annotations.
    pub quads_picked: u32,
    pub best_frag: bool,
    pub wft: bool,
    pub dominator: bool,
    pub will_power: bool,
    /// Award display name → authoritative value from annotation overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_achievements: Option<BTreeMap<String, u32>>,
    /// Side channel of a Head Hunter annotation: the named leader.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_leader: Option<String>,
    /// Side channel of a Bully annotation: the named weakest player.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weakest_player: Option<String>,
    /// Side channels of a Specialist annotation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialist_weapon: Option<WeaponId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialist_weapon_kills: Option<u32>,
}

impl PlayerStat {
    /// Value of the annotation override stored under `key`, if any.
    pub fn custom_achievement(&self, key: &str) -> Option<u32> {
        self.custom_achievements
            .as_ref()
            .and_then(|m| m.get(key).copied())
    }

    /// Store an annotation override, creating the map on first use.
    pub fn set_custom_achievement(&mut self, key: &str, value: u32) {
        self.custom_achievements
            .get_or_insert_with(BTreeMap::new)
            .insert(key.to_string(), value);
    }
}

/// Player-name → [`PlayerStat`] map preserving first-seen order.
///
/// Iteration order is part of the semantics: tie policies that take "the
/// first maximum encountered" resolve in first-seen order, and serialized
/// reports list players in that same order. Lookups are linear; a match
/// involves a handful of players, so a Vec beats hashing here anyway.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerTable {
    entries: Vec<(String, PlayerStat)>,
}

impl PlayerTable {
    /// An empty table.
    pub fn new() -> Self {
        PlayerTable::default()
    }

    /// Number of distinct players seen.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a player by exact name.
    pub fn get(&self, name: &str) -> Option<&PlayerStat> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, stat)| stat)
    }

    /// Mutable lookup by exact name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut PlayerStat> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, stat)| stat)
    }

    /// Entry for `name`, created zeroed on first sight.
    pub fn ensure(&mut self, name: &str) -> &mut PlayerStat {
        let idx = match self.entries.iter().position(|(n, _)| n == name) {
            Some(idx) => idx,
            None => {
                self.entries.push((name.to_string(), PlayerStat::default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }

    /// Iterate `(name, stat)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PlayerStat)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), s))
    }

    /// Mutable iteration in first-seen order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut PlayerStat)> {
        self.entries.iter_mut().map(|(n, s)| (n.as_str(), s))
    }

    /// Player names in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

impl Serialize for PlayerTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, stat) in &self.entries {
            map.serialize_entry(name, stat)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_creates_zeroed_once() {
        let mut table = PlayerTable::new();
        table.ensure("Grunt").kills = 3;
        assert_eq!(table.len(), 1);
        assert_eq!(table.ensure("Grunt").kills, 3);
        assert_eq!(table.len(), 1);

        let fresh = table.ensure("Boss");
        assert_eq!(fresh.kills, 0);
        assert_eq!(fresh.deaths, 0);
        assert!(fresh.custom_achievements.is_none());
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_iteration_preserves_first_seen_order() {
        let mut table = PlayerTable::new();
        for name in ["Charlie", "Alpha", "Bravo", "Alpha"] {
            table.ensure(name);
        }
        let names: Vec<&str> = table.names().collect();
        assert_eq!(names, ["Charlie", "Alpha", "Bravo"]);
    }

    #[test]
    fn test_names_are_exact_literals() {
        let mut table = PlayerTable::new();
        table.ensure("grunt");
        table.ensure("Grunt ");
        assert!(table.get("Grunt").is_none());
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_custom_achievement_roundtrip() {
        let mut stat = PlayerStat::default();
        assert_eq!(stat.custom_achievement("Grenadier"), None);
        stat.set_custom_achievement("Grenadier", 7);
        assert_eq!(stat.custom_achievement("Grenadier"), Some(7));
        stat.set_custom_achievement("Grenadier", 9);
        assert_eq!(stat.custom_achievement("Grenadier"), Some(9));
    }

    #[test]
    fn test_serializes_as_ordered_map_with_camel_case() {
        let mut table = PlayerTable::new();
        table.ensure("Zed").kills = 1;
        table.ensure("Ann").event_streak = 2;

        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["Zed"]["kills"], 1);
        assert_eq!(json["Ann"]["eventStreak"], 2);
        // Unset side channels stay off the wire.
        assert!(json["Zed"].get("customAchievements").is_none());
        assert!(json["Zed"].get("groupLeader").is_none());

        // Emission order is first-seen order (check the raw text;
        // `to_value` re-sorts object keys).
        let text = serde_json::to_string(&table).unwrap();
        assert!(text.find("Zed").unwrap() < text.find("Ann").unwrap());
    }
}
