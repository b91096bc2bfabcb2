//! Strict three-way partitioning of raw lines.

use fraglog_rules::SYSTEM_MESSAGES;

use crate::classifier::Classifier;
use crate::event::LineEvent;

/// Result of partitioning a line sequence.
///
/// Game lines feed the aggregation fold; non-game lines feed chat
/// association. System messages land in neither.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub game_lines: Vec<String>,
    pub non_game_lines: Vec<String>,
}

impl Classifier {
    /// Split `lines` into game and non-game partitions.
    ///
    /// Classification runs first: any line matching a rule tier is a game
    /// line. Only unmatched lines are checked against the system-message
    /// denylist, and denylisted lines are dropped entirely. They are
    /// server noise, not chat candidates.
    pub fn partition_lines<S: AsRef<str>>(&self, lines: &[S]) -> Partition {
        let mut partition = Partition::default();
        for line in lines {
            let line = line.as_ref();
            if !matches!(self.classify(line), LineEvent::Noise) {
                partition.game_lines.push(line.to_string());
            } else if !is_system_message(line) {
                partition.non_game_lines.push(line.to_string());
            }
        }
        partition
    }
}

/// A line containing any denylist substring is server noise.
pub fn is_system_message(line: &str) -> bool {
    SYSTEM_MESSAGES.iter().any(|m| line.contains(m))
}
