//! Stateful single-pass aggregation over classified lines.
//!
//! `MatchAnalyzer` wraps the stateless [`Classifier`] and folds the event
//! stream into per-player statistics, a global weapon tally, and the
//! cross-player event streak.
//!
//! # Architecture
//!
//! 1. Each game line is classified (stateless, first match wins)
//! 2. The resulting event mutates the player table and weapon tally
//! 3. Kill/suicide events also advance the streak accumulator
//! 4. After the fold, non-game lines are associated with player chats
//!
//! One analyzer serves one run: state starts empty and [`finish`] hands the
//! aggregate over as a [`MatchReport`].
//!
//! [`finish`]: MatchAnalyzer::finish

use fraglog_rules::{Badge, WeaponId};

use crate::awards;
use crate::classifier::Classifier;
use crate::error::Result;
use crate::event::{AnnotationEvent, LineEvent};
use crate::player::PlayerTable;
use crate::result::{MatchReport, WeaponStats};

// =============================================================================
// Streak tracker
// =============================================================================

/// Explicit accumulator for the cross-player event streak.
///
/// Tracks who produced the most recent qualifying event (kill or suicide)
/// and how long their current run is. The run is global: a qualifying event
/// by anyone else resets it to 1 for the new actor. Annotation and noise
/// lines never touch it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreakTracker {
    current_actor: Option<String>,
    current_run: u32,
}

impl StreakTracker {
    /// Record a qualifying event by `actor` and return the updated run
    /// length attributed to them.
    pub fn observe(&mut self, actor: &str) -> u32 {
        if self.current_actor.as_deref() == Some(actor) {
            self.current_run += 1;
        } else {
            self.current_actor = Some(actor.to_string());
            self.current_run = 1;
        }
        self.current_run
    }

    /// The actor holding the current run, if any event was seen yet.
    pub fn current_actor(&self) -> Option<&str> {
        self.current_actor.as_deref()
    }

    /// Length of the current run.
    pub fn current_run(&self) -> u32 {
        self.current_run
    }
}

// =============================================================================
// Match analyzer
// =============================================================================

/// Stateful aggregator folding classified lines into a [`MatchReport`].
///
/// # Example
///
/// ```rust
/// use fraglog_engine::MatchAnalyzer;
///
/// let analyzer = MatchAnalyzer::with_builtin_rules().unwrap();
/// let report = analyzer.analyze(
///     &["A was railed by B", "B was railed by A"],
///     &["A: good game"],
/// );
/// assert_eq!(report.stats.get("A").unwrap().kills, 1);
/// assert_eq!(report.stats.get("A").unwrap().chats, ["A: good game"]);
/// ```
pub struct MatchAnalyzer {
    classifier: Classifier,
    stats: PlayerTable,
    weapon_stats: WeaponStats,
    streak: StreakTracker,
}

impl MatchAnalyzer {
    /// A fresh analyzer using the given classifier.
    pub fn new(classifier: Classifier) -> Self {
        MatchAnalyzer {
            classifier,
            stats: PlayerTable::new(),
            weapon_stats: WeaponStats::new(),
            streak: StreakTracker::default(),
        }
    }

    /// A fresh analyzer over the builtin rule table.
    pub fn with_builtin_rules() -> Result<Self> {
        Ok(MatchAnalyzer::new(Classifier::with_builtin_rules()?))
    }

    /// Classify one game line and fold its event into the aggregate.
    ///
    /// Returns the classified event; noise lines leave the state untouched.
    pub fn process_line(&mut self, line: &str) -> LineEvent {
        let event = self.classifier.classify(line);
        self.apply(&event);
        event
    }

    /// Run the whole pass: fold every game line in order, then associate
    /// non-game lines with player chats, and hand the aggregate over.
    pub fn analyze<S: AsRef<str>>(mut self, game_lines: &[S], non_game_lines: &[S]) -> MatchReport {
        for line in game_lines {
            self.process_line(line.as_ref());
        }
        self.associate_chats(non_game_lines);
        self.finish()
    }

    /// The player table accumulated so far.
    pub fn stats(&self) -> &PlayerTable {
        &self.stats
    }

    /// The weapon tally accumulated so far.
    pub fn weapon_stats(&self) -> &WeaponStats {
        &self.weapon_stats
    }

    /// Number of distinct players seen so far.
    pub fn player_count(&self) -> usize {
        self.stats.len()
    }

    /// Consume the analyzer, yielding the final report.
    pub fn finish(self) -> MatchReport {
        MatchReport {
            stats: self.stats,
            weapon_stats: self.weapon_stats,
        }
    }

    // -------------------------------------------------------------------------
    // Event application
    // -------------------------------------------------------------------------

    fn apply(&mut self, event: &LineEvent) {
        match event {
            LineEvent::Kill {
                victim,
                killer,
                weapon,
            } => self.apply_kill(victim, killer, *weapon),
            LineEvent::Suicide { player } => self.apply_suicide(player),
            LineEvent::Annotation(annotation) => self.apply_annotation(annotation),
            LineEvent::Noise => {}
        }
    }

    fn apply_kill(&mut self, victim: &str, killer: &str, weapon: WeaponId) {
        self.stats.ensure(victim).deaths += 1;

        let run = self.streak.observe(killer);
        let entry = self.stats.ensure(killer);
        entry.kills += 1;
        *entry.kill_breakdown.entry(victim.to_string()).or_insert(0) += 1;
        *entry.weapon_kills_breakdown.entry(weapon).or_insert(0) += 1;
        // Derived counters; weapon_kills_breakdown stays the source of truth.
        match weapon {
            WeaponId::Telefrag => entry.telefrags += 1,
            WeaponId::Grenade => entry.grenade_kills += 1,
            WeaponId::Blaster => entry.blaster_kills += 1,
            _ => {}
        }
        entry.event_streak = entry.event_streak.max(run);

        self.weapon_stats.record_kill(weapon);
    }

    fn apply_suicide(&mut self, player: &str) {
        let run = self.streak.observe(player);
        let entry = self.stats.ensure(player);
        // A suicide is always also a death, never a kill.
        entry.suicides += 1;
        entry.deaths += 1;
        entry.event_streak = entry.event_streak.max(run);
    }

    fn apply_annotation(&mut self, annotation: &AnnotationEvent) {
        match annotation {
            AnnotationEvent::QuadsPicked { player, count } => {
                // Assignment, not accumulation: a later annotation for the
                // same player overwrites.
                self.stats.ensure(player).quads_picked = *count;
            }
            AnnotationEvent::Badge { player, badge } => {
                let entry = self.stats.ensure(player);
                match badge {
                    Badge::BestFrag => entry.best_frag = true,
                    Badge::Wft => entry.wft = true,
                    Badge::Dominator => entry.dominator = true,
                    Badge::WillPower => entry.will_power = true,
                }
            }
            AnnotationEvent::HeadHunter {
                player,
                kills,
                leader,
            } => {
                let entry = self.stats.ensure(player);
                entry.set_custom_achievement(awards::HEAD_HUNTER, *kills);
                entry.group_leader = Some(leader.clone());
            }
            AnnotationEvent::Bully {
                player,
                kills,
                victim,
            } => {
                let entry = self.stats.ensure(player);
                entry.set_custom_achievement(awards::BULLY, *kills);
                entry.weakest_player = Some(victim.clone());
            }
            AnnotationEvent::Specialist {
                player,
                kills,
                weapon,
            } => {
                // An annotation naming an unknown weapon records nothing.
                if let Some(weapon) = weapon {
                    let entry = self.stats.ensure(player);
                    entry.specialist_weapon = Some(*weapon);
                    entry.specialist_weapon_kills = Some(*kills);
                }
            }
            AnnotationEvent::Award {
                player,
                award,
                value,
            } => {
                self.stats.ensure(player).set_custom_achievement(award, *value);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Chat association (post-pass)
    // -------------------------------------------------------------------------

    /// Attribute non-game lines to players by literal name prefix.
    ///
    /// `chat_count` counts every non-game line for every player, prefix
    /// match or not; report consumers expect the inflated figure, so the
    /// two fields intentionally disagree.
    fn associate_chats<S: AsRef<str>>(&mut self, non_game_lines: &[S]) {
        for line in non_game_lines {
            let line = line.as_ref();
            for (name, stat) in self.stats.iter_mut() {
                if line.starts_with(name) {
                    stat.chats.push(line.to_string());
                }
                stat.chat_count += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(game_lines: &[&str], non_game_lines: &[&str]) -> MatchReport {
        MatchAnalyzer::with_builtin_rules()
            .unwrap()
            .analyze(game_lines, non_game_lines)
    }

    // =========================================================================
    // Kill and suicide folding
    // =========================================================================

    #[test]
    fn test_symmetric_kills_and_a_suicide() {
        let report = analyze(
            &[
                "A was railed by B",
                "B was railed by A",
                "C does a back flip into the lava",
            ],
            &[],
        );

        let a = report.stats.get("A").unwrap();
        assert_eq!((a.kills, a.deaths), (1, 1));
        assert_eq!(a.kill_breakdown.get("B"), Some(&1));

        let b = report.stats.get("B").unwrap();
        assert_eq!((b.kills, b.deaths), (1, 1));
        assert_eq!(b.kill_breakdown.get("A"), Some(&1));

        let c = report.stats.get("C").unwrap();
        assert_eq!((c.kills, c.deaths, c.suicides), (0, 1, 1));
        assert!(c.kill_breakdown.is_empty());

        assert_eq!(report.weapon_stats.get(WeaponId::Railgun), 2);
    }

    #[test]
    fn test_players_created_in_first_seen_order() {
        let report = analyze(&["Victim was railed by Shooter"], &[]);
        let names: Vec<&str> = report.stats.names().collect();
        // The victim is ensured before the killer.
        assert_eq!(names, ["Victim", "Shooter"]);
    }

    #[test]
    fn test_derived_weapon_counters() {
        let report = analyze(
            &[
                "A tried to invade B's personal space",
                "A feels B's pain",
                "A was popped by B's grenade",
                "A caught B's handgrenade",
                "A didn't see B's handgrenade",
                "A was blasted by B",
                "A was railed by B",
            ],
            &[],
        );
        let b = report.stats.get("B").unwrap();
        assert_eq!(b.kills, 7);
        assert_eq!(b.telefrags, 2);
        assert_eq!(b.grenade_kills, 3);
        assert_eq!(b.blaster_kills, 1);
        assert_eq!(
            b.weapon_kills_breakdown.get(&WeaponId::Telefrag),
            Some(&2)
        );
        assert_eq!(report.weapon_stats.get(WeaponId::Grenade), 3);
        assert_eq!(report.weapon_stats.get(WeaponId::Railgun), 1);
    }

    #[test]
    fn test_self_kill_counts_both_sides() {
        let report = analyze(&["A was blasted by A"], &[]);
        let a = report.stats.get("A").unwrap();
        assert_eq!((a.kills, a.deaths, a.suicides), (1, 1, 0));
        assert_eq!(a.kill_breakdown.get("A"), Some(&1));
    }

    #[test]
    fn test_noise_lines_change_nothing() {
        let mut analyzer = MatchAnalyzer::with_builtin_rules().unwrap();
        assert_eq!(analyzer.process_line("strange unmatched line"), LineEvent::Noise);
        assert_eq!(analyzer.player_count(), 0);
        assert_eq!(analyzer.streak.current_run(), 0);
    }

    // =========================================================================
    // Streak semantics
    // =========================================================================

    #[test]
    fn test_streak_maximum_per_player() {
        let report = analyze(
            &[
                "A was railed by B",
                "A was railed by B",
                "C was railed by D",
            ],
            &[],
        );
        assert_eq!(report.stats.get("B").unwrap().event_streak, 2);
        assert_eq!(report.stats.get("D").unwrap().event_streak, 1);
    }

    #[test]
    fn test_streak_broken_only_by_other_actor() {
        let mut analyzer = MatchAnalyzer::with_builtin_rules().unwrap();
        analyzer.process_line("A was railed by B");
        analyzer.process_line("C was railed by B");
        // Annotation lines do not break the run.
        analyzer.process_line("D picked quad 2 times");
        // Noise does not break the run either.
        analyzer.process_line("arbitrary chatter");
        analyzer.process_line("D was railed by B");
        assert_eq!(analyzer.stats().get("B").unwrap().event_streak, 3);

        analyzer.process_line("B was railed by A");
        analyzer.process_line("B was railed by A");
        let report = analyzer.finish();
        assert_eq!(report.stats.get("B").unwrap().event_streak, 3);
        assert_eq!(report.stats.get("A").unwrap().event_streak, 2);
    }

    #[test]
    fn test_suicides_participate_in_streak() {
        let report = analyze(
            &[
                "A was railed by B",
                "B does a back flip into the lava",
                "B does a back flip into the lava",
                "A was railed by B",
            ],
            &[],
        );
        // B: kill, suicide, suicide, kill is one unbroken run of 4.
        assert_eq!(report.stats.get("B").unwrap().event_streak, 4);
    }

    #[test]
    fn test_streak_tracker_observe() {
        let mut tracker = StreakTracker::default();
        assert_eq!(tracker.observe("A"), 1);
        assert_eq!(tracker.observe("A"), 2);
        assert_eq!(tracker.observe("B"), 1);
        assert_eq!(tracker.current_actor(), Some("B"));
        assert_eq!(tracker.observe("A"), 1);
    }

    // =========================================================================
    // Annotations
    // =========================================================================

    #[test]
    fn test_quads_assignment_overwrites() {
        let report = analyze(
            &["A picked quad 3 times", "A picked quad 2 times"],
            &[],
        );
        assert_eq!(report.stats.get("A").unwrap().quads_picked, 2);
    }

    #[test]
    fn test_badges_set_flags() {
        let report = analyze(
            &["A gets a Best Frag", "A gets a WillPower", "B gets a WFT"],
            &[],
        );
        let a = report.stats.get("A").unwrap();
        assert!(a.best_frag && a.will_power);
        assert!(!a.wft && !a.dominator);
        assert!(report.stats.get("B").unwrap().wft);
    }

    #[test]
    fn test_award_annotation_stores_override() {
        let report = analyze(&["X gets a Grenadier award with 7 kills"], &[]);
        let x = report.stats.get("X").unwrap();
        assert_eq!(x.custom_achievement("Grenadier"), Some(7));
        // Annotations never touch combat counters or the streak.
        assert_eq!((x.kills, x.deaths, x.event_streak), (0, 0, 0));
    }

    #[test]
    fn test_hunter_annotations_store_side_channels() {
        let report = analyze(
            &[
                "H gets a Head Hunter award with 5 kills on L",
                "B gets a Bully award with 4 kills on W",
                "S gets a Specialist award with 6 kills using Chaingun",
            ],
            &[],
        );
        let h = report.stats.get("H").unwrap();
        assert_eq!(h.custom_achievement("Head Hunter"), Some(5));
        assert_eq!(h.group_leader.as_deref(), Some("L"));

        let b = report.stats.get("B").unwrap();
        assert_eq!(b.custom_achievement("Bully"), Some(4));
        assert_eq!(b.weakest_player.as_deref(), Some("W"));

        let s = report.stats.get("S").unwrap();
        assert_eq!(s.specialist_weapon, Some(WeaponId::Chaingun));
        assert_eq!(s.specialist_weapon_kills, Some(6));
    }

    #[test]
    fn test_specialist_annotation_with_unknown_weapon_is_inert() {
        let report = analyze(
            &["S gets a Specialist award with 6 kills using Crowbar"],
            &[],
        );
        assert!(report.stats.get("S").is_none());
    }

    // =========================================================================
    // Chat association
    // =========================================================================

    #[test]
    fn test_chats_prefix_filtered_chat_count_inflated() {
        let report = analyze(
            &["Alpha was railed by Beta"],
            &["Alpha: hi", "Beta: hello", "unrelated server text"],
        );

        let alpha = report.stats.get("Alpha").unwrap();
        assert_eq!(alpha.chats, ["Alpha: hi"]);
        assert_eq!(alpha.chat_count, 3);

        let beta = report.stats.get("Beta").unwrap();
        assert_eq!(beta.chats, ["Beta: hello"]);
        assert_eq!(beta.chat_count, 3);
    }

    #[test]
    fn test_chat_prefix_is_literal_name_start() {
        let report = analyze(
            &["Al was railed by Beta"],
            &["Alpha: hi there", "Al: short name"],
        );
        // "Al" prefix-matches both lines; "Alpha..." starts with "Al".
        let al = report.stats.get("Al").unwrap();
        assert_eq!(al.chats, ["Alpha: hi there", "Al: short name"]);
        assert_eq!(al.chat_count, 2);
    }

    #[test]
    fn test_chat_pass_only_sees_known_players() {
        let report = analyze(&[], &["Ghost: anybody here?"]);
        assert!(report.stats.is_empty());
    }

    // =========================================================================
    // Determinism
    // =========================================================================

    #[test]
    fn test_same_input_same_output() {
        let game = [
            "A was railed by B",
            "C ate D's rocket",
            "B does a back flip into the lava",
            "A picked quad 2 times",
        ];
        let chat = ["A: gg", "B: gg"];
        let first = analyze(&game, &chat);
        let second = analyze(&game, &chat);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
