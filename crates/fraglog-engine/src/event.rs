//! Classified line events.

use fraglog_rules::{Badge, WeaponId};

/// The outcome of classifying one log line.
///
/// At most one rule produces the event: tiers are consulted in kill →
/// suicide → annotation order and the first match in a tier wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    /// One player killed another; the weapon comes from the matched rule's
    /// tag, not from the line text.
    Kill {
        victim: String,
        killer: String,
        weapon: WeaponId,
    },
    /// A player died to the environment.
    Suicide { player: String },
    /// An externally scored award statement.
    Annotation(AnnotationEvent),
    /// No rule in any tier matched.
    Noise,
}

/// A decoded annotation line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationEvent {
    /// Assigns (never increments) the player's quad pickup tally.
    QuadsPicked { player: String, count: u32 },
    /// Sets one boolean badge flag.
    Badge { player: String, badge: Badge },
    /// Authoritative Head Hunter result: kills on the named leader.
    HeadHunter {
        player: String,
        kills: u32,
        leader: String,
    },
    /// Authoritative Bully result: kills on the named weakest player.
    Bully {
        player: String,
        kills: u32,
        victim: String,
    },
    /// Authoritative Specialist result. `weapon` is `None` when the
    /// annotation named an unknown weapon; the line is still consumed as a
    /// game line but nothing gets recorded.
    Specialist {
        player: String,
        kills: u32,
        weapon: Option<WeaponId>,
    },
    /// Generic override keyed by the award's display name.
    Award {
        player: String,
        award: String,
        value: u32,
    },
}
