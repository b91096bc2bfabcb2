//! # fraglog-rules
//!
//! The declarative pattern library for game-server console logs.
//!
//! A [`LineRule`] pairs a regex source with a [`RuleKind`] describing what
//! its capture groups mean:
//!
//! - **Kill rules** capture `(victim, killer)`, always in that group order
//!   whatever the English word order of the line, and carry the
//!   [`WeaponId`] to attribute as declared metadata, never re-derived from
//!   the matched text.
//! - **Suicide rules** capture `(player)`.
//! - **Annotation rules** capture award-specific shapes ([`AnnotationKind`]):
//!   quad pickup tallies, boolean badges, and authoritative award overrides
//!   emitted by an external scoring process.
//!
//! Rules are plain data; compilation and first-match evaluation live in the
//! engine crate. [`builtin_rules`] is the stock table and its order is the
//! priority order: generic phrasings ("was blasted by", the bare award
//! form) deliberately trail the specific ones. [`SYSTEM_MESSAGES`] is the
//! denylist of server noise dropped during partitioning.
//!
//! ## Quick Start
//!
//! ```rust
//! use fraglog_rules::{RuleKind, WeaponId, builtin_rules};
//!
//! let rules = builtin_rules();
//! let railgun = &rules[0];
//! assert_eq!(railgun.pattern, "(.+) was railed by (.+)");
//! assert_eq!(railgun.kind, RuleKind::Kill { weapon: WeaponId::Railgun });
//! ```

pub mod builtin;
pub mod rule;
pub mod weapon;

// Re-export the most commonly used types at crate root
pub use builtin::{SYSTEM_MESSAGES, builtin_rules};
pub use rule::{AnnotationKind, Badge, LineRule, RuleKind};
pub use weapon::WeaponId;
