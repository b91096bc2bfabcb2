//! Rule data model for the pattern library.
//!
//! A rule is plain data: a regex source string plus a kind describing what
//! its capture groups mean. Compilation and matching live in the engine
//! crate; keeping the library declarative lets callers assemble and reorder
//! tables before anything is compiled.

use std::fmt;

use crate::weapon::WeaponId;

/// Badge annotations: awards that are a single boolean flag per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    BestFrag,
    Wft,
    Dominator,
    WillPower,
}

impl Badge {
    /// The display name as it appears in annotation lines.
    pub fn name(&self) -> &'static str {
        match self {
            Badge::BestFrag => "Best Frag",
            Badge::Wft => "WFT",
            Badge::Dominator => "Dominator",
            Badge::WillPower => "WillPower",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The capture shape of an annotation rule.
///
/// Annotation lines are emitted by an external scoring process and state an
/// award result directly; each kind documents the group layout its patterns
/// must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationKind {
    /// Captures `(player, count)`. Assigns the quad pickup tally.
    QuadsPicked,
    /// Captures `(player)`. Sets one boolean badge flag.
    Badge(Badge),
    /// Captures `(player, kills, leader)`. Authoritative Head Hunter result.
    HeadHunter,
    /// Captures `(player, kills, victim)`. Authoritative Bully result.
    Bully,
    /// Captures `(player, kills, weapon)`. Authoritative Specialist result.
    Specialist,
    /// Captures `(player, award, value)`. Generic override keyed by the
    /// award's display name.
    Award,
}

/// What a rule recognizes and what its captures mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Captures `(victim, killer)` in that fixed order, regardless of the
    /// line's natural word order. The tag names the weapon to attribute;
    /// attribution is never re-parsed from the matched text.
    Kill { weapon: WeaponId },
    /// Captures `(player)`.
    Suicide,
    /// Captures per the [`AnnotationKind`].
    Annotation(AnnotationKind),
}

impl RuleKind {
    /// Minimum number of capture groups a pattern of this kind must have.
    pub fn required_captures(&self) -> usize {
        match self {
            RuleKind::Kill { .. } => 2,
            RuleKind::Suicide => 1,
            RuleKind::Annotation(kind) => match kind {
                AnnotationKind::QuadsPicked => 2,
                AnnotationKind::Badge(_) => 1,
                AnnotationKind::HeadHunter
                | AnnotationKind::Bully
                | AnnotationKind::Specialist
                | AnnotationKind::Award => 3,
            },
        }
    }
}

/// One ordered entry of the pattern library.
///
/// Order is priority: within a tier, the first rule whose pattern matches a
/// line wins and later rules are never consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRule {
    /// Regex source. Compiled once by the engine when a table is loaded.
    pub pattern: String,
    pub kind: RuleKind,
}

impl LineRule {
    /// A kill rule attributing `weapon`.
    pub fn kill(pattern: &str, weapon: WeaponId) -> Self {
        LineRule {
            pattern: pattern.to_string(),
            kind: RuleKind::Kill { weapon },
        }
    }

    /// A suicide rule.
    pub fn suicide(pattern: &str) -> Self {
        LineRule {
            pattern: pattern.to_string(),
            kind: RuleKind::Suicide,
        }
    }

    /// An annotation rule with the given capture shape.
    pub fn annotation(pattern: &str, kind: AnnotationKind) -> Self {
        LineRule {
            pattern: pattern.to_string(),
            kind: RuleKind::Annotation(kind),
        }
    }
}
