//! Serializable aggregation and award result types.

use std::collections::BTreeMap;

use fraglog_rules::WeaponId;
use serde::Serialize;

use crate::player::PlayerTable;

/// Global weapon → kill tallies across all players.
///
/// Every weapon is present from the start at zero, so reports always carry
/// the full weapon axis and key order follows the canonical weapon order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeaponStats(BTreeMap<WeaponId, u32>);

impl WeaponStats {
    /// A fresh tally with every weapon at zero.
    pub fn new() -> Self {
        WeaponStats(WeaponId::ALL.iter().map(|&w| (w, 0)).collect())
    }

    /// Count one kill with `weapon`.
    pub fn record_kill(&mut self, weapon: WeaponId) {
        *self.0.entry(weapon).or_insert(0) += 1;
    }

    /// Kills attributed to `weapon`.
    pub fn get(&self, weapon: WeaponId) -> u32 {
        self.0.get(&weapon).copied().unwrap_or(0)
    }

    /// Iterate `(weapon, kills)` in canonical weapon order.
    pub fn iter(&self) -> impl Iterator<Item = (WeaponId, u32)> {
        self.0.iter().map(|(&w, &n)| (w, n))
    }

    /// The weapon with the smallest nonzero tally, with that tally.
    ///
    /// Weapons nobody killed with are excluded; ties resolve to the
    /// canonically first weapon. `None` when no kills were recorded at all.
    pub fn least_used(&self) -> Option<(WeaponId, u32)> {
        self.iter().filter(|&(_, n)| n > 0).min_by_key(|&(_, n)| n)
    }
}

impl Default for WeaponStats {
    fn default() -> Self {
        Self::new()
    }
}

/// The full outcome of one aggregation run.
///
/// This shape is the wire contract with the report-storage collaborator:
/// plain maps and primitives, stable key order, camelCase names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub stats: PlayerTable,
    pub weapon_stats: WeaponStats,
}

/// A tie-collecting, symmetric award result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Achievement {
    /// Every player at the maximum, in first-seen order.
    pub achievers: Vec<String>,
    pub count: u32,
}

/// An asymmetric hunter/target award result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadHunterAchievement {
    pub hunter: String,
    pub kills_on_leader: u32,
    /// Comma-joined when the target set has ties.
    pub leader: String,
}

/// The weapon with the smallest nonzero global tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeastUsedWeapon {
    pub weapon: WeaponId,
    pub count: u32,
}
