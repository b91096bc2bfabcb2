//! # fraglog-engine
//!
//! Classification and match analysis for deathmatch console logs.
//!
//! This crate consumes the rule tables provided by [`fraglog_rules`] and
//! turns raw console lines into per-player statistics and awards using a
//! compile-then-classify model.
//!
//! ## Architecture
//!
//! - **Classification** (stateless): the rule tables are compiled once into
//!   regex tiers; each line is matched kill rules first, then suicide rules,
//!   then annotation rules, first match wins.
//! - **Analysis** (stateful): a single forward pass folds classified events
//!   into player entries, the global weapon tally, and the cross-player
//!   event streak, then associates chat lines with known players.
//! - **Awards** (pure): every award is derived from the finished aggregate;
//!   authoritative annotation overrides are honored before any counting.
//!
//! ## Quick Start — Classification Only
//!
//! ```rust
//! use fraglog_engine::{Classifier, LineEvent};
//! use fraglog_rules::WeaponId;
//!
//! let classifier = Classifier::with_builtin_rules().unwrap();
//!
//! let event = classifier.classify("Orbb was railed by Keel");
//! assert_eq!(
//!     event,
//!     LineEvent::Kill {
//!         victim: "Orbb".into(),
//!         killer: "Keel".into(),
//!         weapon: WeaponId::Railgun,
//!     }
//! );
//! assert_eq!(classifier.classify("Keel: good game"), LineEvent::Noise);
//! ```
//!
//! ## Quick Start — Full Match Analysis
//!
//! ```rust
//! use fraglog_engine::{AwardsReport, MatchAnalyzer};
//!
//! let mut analyzer = MatchAnalyzer::with_builtin_rules().unwrap();
//! for line in [
//!     "Orbb was railed by Keel",
//!     "Keel ate Orbb's rocket",
//!     "Keel does a back flip into the lava",
//! ] {
//!     analyzer.process_line(line);
//! }
//!
//! let report = analyzer.finish();
//! assert_eq!(report.stats.get("Keel").unwrap().kills, 1);
//! assert_eq!(report.stats.get("Orbb").unwrap().kills, 1);
//! assert_eq!(report.stats.get("Keel").unwrap().suicides, 1);
//!
//! let awards = AwardsReport::from_report(&report);
//! assert_eq!(awards.wrong_turn.unwrap().achievers, ["Keel"]);
//! ```

pub mod analyzer;
pub mod awards;
pub mod classifier;
pub mod error;
pub mod event;
pub mod partition;
pub mod player;
pub mod result;

// Re-export the most commonly used types and functions at crate root
pub use analyzer::{MatchAnalyzer, StreakTracker};
pub use awards::{
    AwardsReport, best_frag_achievers, calculate_head_hunter, calculate_most_blaster_kills,
    calculate_most_chats, calculate_most_event_streak, calculate_most_grenade_kills,
    calculate_most_quads, calculate_most_telefrags, calculate_no_mercy_for_minions,
    calculate_specialist, calculate_wrong_turn, dominator_achievers, get_least_used_weapon,
    wft_achievers, will_power_achievers,
};
pub use classifier::{Classifier, CompiledRule};
pub use error::{EngineError, Result};
pub use event::{AnnotationEvent, LineEvent};
pub use partition::{Partition, is_system_message};
pub use player::{PlayerStat, PlayerTable};
pub use result::{Achievement, HeadHunterAchievement, LeastUsedWeapon, MatchReport, WeaponStats};
