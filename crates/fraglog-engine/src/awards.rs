//! Pure award derivation over the final aggregate.
//!
//! Every calculator is a total function of the player table (plus the
//! weapon tally where the award needs it) and never re-reads the line
//! sequence. Authoritative annotation overrides are checked before any
//! counting: the first player (in first-seen order) carrying one wins.
//!
//! Tie policy differs by award family on purpose:
//! - the `calculate_most_*` family collects every player at the maximum;
//! - the hunter pair and Specialist keep only the first maximum found in
//!   first-seen order.

use serde::Serialize;

use crate::player::{PlayerStat, PlayerTable};
use crate::result::{Achievement, HeadHunterAchievement, LeastUsedWeapon, MatchReport, WeaponStats};

// =============================================================================
// Award keys (display names, also the customAchievements lookup keys)
// =============================================================================

pub const HEAD_HUNTER: &str = "Head Hunter";
pub const BULLY: &str = "Bully";
pub const RESPAWN_HERO: &str = "Respawn Hero";
pub const WRONG_TURN: &str = "Wrong Turn";
pub const GRENADIER: &str = "Grenadier";
pub const OPTIMIST: &str = "Optimist";
pub const TROUBLEMAKER: &str = "Troublemaker";
pub const QUAD_MANIAC: &str = "Quad Maniac";
pub const CHATTERBOX: &str = "Chatterbox";

// =============================================================================
// Hunter pair
// =============================================================================

/// "Head Hunter": who most punished the kill leader(s).
///
/// Leaders are every player at the kill maximum; among the others, the
/// first player (in first-seen order) with the highest combined kill count
/// against the leaders wins. `None` with fewer than two players, a zero
/// maximum, or no candidate kills on a leader at all.
pub fn calculate_head_hunter(stats: &PlayerTable) -> Option<HeadHunterAchievement> {
    hunter_override(stats, HEAD_HUNTER, |s| s.group_leader.as_deref())
        .or_else(|| hunt(stats, |s| s.kills))
}

/// "Bully": who most punished the death leader(s), the match's weakest
/// players. Structurally the mirror of [`calculate_head_hunter`].
pub fn calculate_no_mercy_for_minions(stats: &PlayerTable) -> Option<HeadHunterAchievement> {
    hunter_override(stats, BULLY, |s| s.weakest_player.as_deref())
        .or_else(|| hunt(stats, |s| s.deaths))
}

/// Shared hunter computation over a leader metric.
fn hunt(
    stats: &PlayerTable,
    metric: impl Fn(&PlayerStat) -> u32,
) -> Option<HeadHunterAchievement> {
    if stats.len() < 2 {
        return None;
    }
    let max = stats.iter().map(|(_, s)| metric(s)).max()?;
    if max == 0 {
        return None;
    }
    let leaders: Vec<&str> = stats
        .iter()
        .filter(|(_, s)| metric(s) == max)
        .map(|(n, _)| n)
        .collect();

    // First maximum in first-seen order; ties are not collected.
    let mut best: Option<(&str, u32)> = None;
    for (name, stat) in stats.iter() {
        if leaders.contains(&name) {
            continue;
        }
        let on_leaders: u32 = leaders
            .iter()
            .map(|l| stat.kill_breakdown.get(*l).copied().unwrap_or(0))
            .sum();
        if on_leaders > best.map_or(0, |(_, k)| k) {
            best = Some((name, on_leaders));
        }
    }

    best.map(|(hunter, kills)| HeadHunterAchievement {
        hunter: hunter.to_string(),
        kills_on_leader: kills,
        leader: leaders.join(", "),
    })
}

/// Authoritative hunter-style override: a player annotated with both the
/// award value and the named target.
fn hunter_override<'a>(
    stats: &'a PlayerTable,
    key: &str,
    target: impl Fn(&'a PlayerStat) -> Option<&'a str>,
) -> Option<HeadHunterAchievement> {
    stats.iter().find_map(|(name, stat)| {
        let leader = target(stat)?;
        let kills = stat.custom_achievement(key)?;
        (kills > 0).then(|| HeadHunterAchievement {
            hunter: name.to_string(),
            kills_on_leader: kills,
            leader: leader.to_string(),
        })
    })
}

// =============================================================================
// Maximum-collecting awards
// =============================================================================

/// "Respawn Hero": most telefrag kills.
pub fn calculate_most_telefrags(stats: &PlayerTable) -> Option<Achievement> {
    award_override(stats, RESPAWN_HERO).or_else(|| collect_max(stats, |s| s.telefrags))
}

/// "Wrong Turn": most suicides.
pub fn calculate_wrong_turn(stats: &PlayerTable) -> Option<Achievement> {
    award_override(stats, WRONG_TURN).or_else(|| collect_max(stats, |s| s.suicides))
}

/// "Grenadier": most grenade-class kills.
pub fn calculate_most_grenade_kills(stats: &PlayerTable) -> Option<Achievement> {
    award_override(stats, GRENADIER).or_else(|| collect_max(stats, |s| s.grenade_kills))
}

/// "Optimist": most blaster kills.
pub fn calculate_most_blaster_kills(stats: &PlayerTable) -> Option<Achievement> {
    award_override(stats, OPTIMIST).or_else(|| collect_max(stats, |s| s.blaster_kills))
}

/// "Troublemaker": longest event streak.
pub fn calculate_most_event_streak(stats: &PlayerTable) -> Option<Achievement> {
    award_override(stats, TROUBLEMAKER).or_else(|| collect_max(stats, |s| s.event_streak))
}

/// "Quad Maniac": most quad pickups.
pub fn calculate_most_quads(stats: &PlayerTable) -> Option<Achievement> {
    award_override(stats, QUAD_MANIAC).or_else(|| collect_max(stats, |s| s.quads_picked))
}

/// "Chatterbox": most attributed chat lines. Reads `chats`, not the
/// inflated `chat_count`.
pub fn calculate_most_chats(stats: &PlayerTable) -> Option<Achievement> {
    award_override(stats, CHATTERBOX).or_else(|| collect_max(stats, |s| s.chats.len() as u32))
}

/// Collect every player whose metric equals the (positive) maximum.
fn collect_max(
    stats: &PlayerTable,
    metric: impl Fn(&PlayerStat) -> u32,
) -> Option<Achievement> {
    let max = stats.iter().map(|(_, s)| metric(s)).max()?;
    if max == 0 {
        return None;
    }
    let achievers = stats
        .iter()
        .filter(|(_, s)| metric(s) == max)
        .map(|(n, _)| n.to_string())
        .collect();
    Some(Achievement {
        achievers,
        count: max,
    })
}

/// First player (in first-seen order) carrying an authoritative override
/// for `key`. Zero-valued overrides are ignored: awards never report a
/// zero magnitude.
fn award_override(stats: &PlayerTable, key: &str) -> Option<Achievement> {
    stats.iter().find_map(|(name, stat)| {
        let value = stat.custom_achievement(key)?;
        (value > 0).then(|| Achievement {
            achievers: vec![name.to_string()],
            count: value,
        })
    })
}

// =============================================================================
// Specialist
// =============================================================================

/// "Specialist": most kills with the least-used weapon.
///
/// First maximum in first-seen order; ties are not collected. `None` when
/// no weapon has kills (the least-used query is empty) or the best player
/// has none with it.
pub fn calculate_specialist(
    stats: &PlayerTable,
    weapon_stats: &WeaponStats,
) -> Option<Achievement> {
    if let Some((name, _, kills)) = specialist_override(stats) {
        return Some(Achievement {
            achievers: vec![name.to_string()],
            count: kills,
        });
    }

    let least = get_least_used_weapon(weapon_stats, stats)?;
    let mut best: Option<(&str, u32)> = None;
    for (name, stat) in stats.iter() {
        let kills = stat
            .weapon_kills_breakdown
            .get(&least.weapon)
            .copied()
            .unwrap_or(0);
        if kills > best.map_or(0, |(_, k)| k) {
            best = Some((name, kills));
        }
    }
    best.map(|(name, kills)| Achievement {
        achievers: vec![name.to_string()],
        count: kills,
    })
}

/// The weapon with the smallest nonzero global tally.
///
/// A Specialist annotation is authoritative and names both the weapon and
/// its kill figure, which is why the player table participates here at all.
/// Without one, the tally is scanned directly.
pub fn get_least_used_weapon(
    weapon_stats: &WeaponStats,
    stats: &PlayerTable,
) -> Option<LeastUsedWeapon> {
    if let Some((_, weapon, kills)) = specialist_override(stats) {
        return Some(LeastUsedWeapon {
            weapon,
            count: kills,
        });
    }
    weapon_stats
        .least_used()
        .map(|(weapon, count)| LeastUsedWeapon { weapon, count })
}

/// First player annotated as Specialist, with the weapon and kill figure.
fn specialist_override(stats: &PlayerTable) -> Option<(&str, fraglog_rules::WeaponId, u32)> {
    stats.iter().find_map(|(name, stat)| {
        let weapon = stat.specialist_weapon?;
        let kills = stat.specialist_weapon_kills?;
        (kills > 0).then_some((name, weapon, kills))
    })
}

// =============================================================================
// Badge achievers
// =============================================================================

/// Every "Best Frag" badge holder.
pub fn best_frag_achievers(stats: &PlayerTable) -> Option<Achievement> {
    flag_achievers(stats, |s| s.best_frag)
}

/// Every "WFT" badge holder.
pub fn wft_achievers(stats: &PlayerTable) -> Option<Achievement> {
    flag_achievers(stats, |s| s.wft)
}

/// Every "Dominator" badge holder.
pub fn dominator_achievers(stats: &PlayerTable) -> Option<Achievement> {
    flag_achievers(stats, |s| s.dominator)
}

/// Every "WillPower" badge holder.
pub fn will_power_achievers(stats: &PlayerTable) -> Option<Achievement> {
    flag_achievers(stats, |s| s.will_power)
}

/// Badge holders in first-seen order; `count` is how many hold it.
fn flag_achievers(
    stats: &PlayerTable,
    flag: impl Fn(&PlayerStat) -> bool,
) -> Option<Achievement> {
    let achievers: Vec<String> = stats
        .iter()
        .filter(|(_, s)| flag(s))
        .map(|(n, _)| n.to_string())
        .collect();
    if achievers.is_empty() {
        return None;
    }
    let count = achievers.len() as u32;
    Some(Achievement { achievers, count })
}

// =============================================================================
// Full report
// =============================================================================

/// Every award derived from one aggregation run. Unearned awards serialize
/// as `null` so consumers see the full award axis.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardsReport {
    pub head_hunter: Option<HeadHunterAchievement>,
    pub no_mercy_for_minions: Option<HeadHunterAchievement>,
    pub most_telefrags: Option<Achievement>,
    pub wrong_turn: Option<Achievement>,
    pub most_grenade_kills: Option<Achievement>,
    pub most_blaster_kills: Option<Achievement>,
    pub most_event_streak: Option<Achievement>,
    pub most_quads: Option<Achievement>,
    pub most_chats: Option<Achievement>,
    pub specialist: Option<Achievement>,
    pub least_used_weapon: Option<LeastUsedWeapon>,
    pub best_frag: Option<Achievement>,
    pub wft: Option<Achievement>,
    pub dominator: Option<Achievement>,
    pub will_power: Option<Achievement>,
}

impl AwardsReport {
    /// Compute every award from a finished report.
    pub fn from_report(report: &MatchReport) -> Self {
        let stats = &report.stats;
        AwardsReport {
            head_hunter: calculate_head_hunter(stats),
            no_mercy_for_minions: calculate_no_mercy_for_minions(stats),
            most_telefrags: calculate_most_telefrags(stats),
            wrong_turn: calculate_wrong_turn(stats),
            most_grenade_kills: calculate_most_grenade_kills(stats),
            most_blaster_kills: calculate_most_blaster_kills(stats),
            most_event_streak: calculate_most_event_streak(stats),
            most_quads: calculate_most_quads(stats),
            most_chats: calculate_most_chats(stats),
            specialist: calculate_specialist(stats, &report.weapon_stats),
            least_used_weapon: get_least_used_weapon(&report.weapon_stats, stats),
            best_frag: best_frag_achievers(stats),
            wft: wft_achievers(stats),
            dominator: dominator_achievers(stats),
            will_power: will_power_achievers(stats),
        }
    }
}
