//! Rule compilation and first-match line classification.
//!
//! The classifier turns a declarative rule table into compiled tiers and
//! implements the classification contract: kill rules first, then suicide
//! rules, then annotation rules, each tier in declared order, first match
//! wins. A line no tier recognizes is [`LineEvent::Noise`].

use fraglog_rules::{AnnotationKind, LineRule, RuleKind, WeaponId, builtin_rules};
use regex::{Captures, Regex};

use crate::error::{EngineError, Result};
use crate::event::{AnnotationEvent, LineEvent};

// =============================================================================
// Compiled types
// =============================================================================

/// A rule with its regex compiled and capture arity verified.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    regex: Regex,
    kind: RuleKind,
}

impl CompiledRule {
    /// The kind this rule was declared with.
    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// The regex source as declared.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

/// Compile one rule, validating that the pattern provides enough capture
/// groups for its kind. Attribution conventions (kill rules capture
/// `(victim, killer)`) are positional, so a short pattern is a table bug
/// worth rejecting up front.
fn compile_rule(rule: &LineRule) -> Result<CompiledRule> {
    let regex = Regex::new(&rule.pattern).map_err(|source| EngineError::InvalidPattern {
        pattern: rule.pattern.clone(),
        source,
    })?;
    // Group 0 is the whole match.
    let found = regex.captures_len() - 1;
    let required = rule.kind.required_captures();
    if found < required {
        return Err(EngineError::MissingCaptures {
            pattern: rule.pattern.clone(),
            required,
            found,
        });
    }
    Ok(CompiledRule {
        regex,
        kind: rule.kind,
    })
}

// =============================================================================
// Classifier
// =============================================================================

/// First-match-wins line classifier over tiered rule tables.
///
/// Rules keep the order they were added in; `classify` consults the kill
/// tier, then the suicide tier, then the annotation tier.
///
/// # Example
///
/// ```rust
/// use fraglog_engine::{Classifier, LineEvent};
/// use fraglog_rules::WeaponId;
///
/// let classifier = Classifier::with_builtin_rules().unwrap();
/// let event = classifier.classify("Sarge was railed by Grunt");
/// assert_eq!(
///     event,
///     LineEvent::Kill {
///         victim: "Sarge".into(),
///         killer: "Grunt".into(),
///         weapon: WeaponId::Railgun,
///     }
/// );
/// assert_eq!(classifier.classify("map changed"), LineEvent::Noise);
/// ```
pub struct Classifier {
    kill_rules: Vec<CompiledRule>,
    suicide_rules: Vec<CompiledRule>,
    annotation_rules: Vec<CompiledRule>,
}

impl Classifier {
    /// Create a classifier with no rules loaded.
    pub fn new() -> Self {
        Classifier {
            kill_rules: Vec::new(),
            suicide_rules: Vec::new(),
            annotation_rules: Vec::new(),
        }
    }

    /// A classifier loaded with the builtin table.
    pub fn with_builtin_rules() -> Result<Self> {
        let mut classifier = Classifier::new();
        classifier.add_rules(&builtin_rules())?;
        Ok(classifier)
    }

    /// Compile and add a single rule to the back of its tier.
    pub fn add_rule(&mut self, rule: &LineRule) -> Result<()> {
        let compiled = compile_rule(rule)?;
        match compiled.kind {
            RuleKind::Kill { .. } => self.kill_rules.push(compiled),
            RuleKind::Suicide => self.suicide_rules.push(compiled),
            RuleKind::Annotation(_) => self.annotation_rules.push(compiled),
        }
        Ok(())
    }

    /// Compile and add every rule of a table, preserving declared order
    /// within each tier.
    pub fn add_rules(&mut self, rules: &[LineRule]) -> Result<()> {
        for rule in rules {
            self.add_rule(rule)?;
        }
        Ok(())
    }

    /// Classify one line. Total: unmatched lines are noise, never errors.
    pub fn classify(&self, line: &str) -> LineEvent {
        for rule in &self.kill_rules {
            if let Some(caps) = rule.regex.captures(line)
                && let RuleKind::Kill { weapon } = rule.kind
            {
                return LineEvent::Kill {
                    victim: group(&caps, 1),
                    killer: group(&caps, 2),
                    weapon,
                };
            }
        }
        for rule in &self.suicide_rules {
            if let Some(caps) = rule.regex.captures(line) {
                return LineEvent::Suicide {
                    player: group(&caps, 1),
                };
            }
        }
        for rule in &self.annotation_rules {
            if let Some(caps) = rule.regex.captures(line)
                && let RuleKind::Annotation(kind) = rule.kind
            {
                return LineEvent::Annotation(decode_annotation(kind, &caps));
            }
        }
        LineEvent::Noise
    }

    /// Total number of rules across all tiers.
    pub fn rule_count(&self) -> usize {
        self.kill_rules.len() + self.suicide_rules.len() + self.annotation_rules.len()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Capture decoding
// =============================================================================

/// Text of capture group `i`, empty if the group did not participate.
fn group(caps: &Captures<'_>, i: usize) -> String {
    caps.get(i).map_or_else(String::new, |m| m.as_str().to_string())
}

/// Numeric capture group `i`. Builtin patterns capture counts as `\d+`;
/// caller-supplied patterns may capture arbitrary text, which falls back
/// to 0 rather than failing the (total) classification.
fn count(caps: &Captures<'_>, i: usize) -> u32 {
    caps.get(i)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Build the annotation event for a matched rule from its captures.
fn decode_annotation(kind: AnnotationKind, caps: &Captures<'_>) -> AnnotationEvent {
    match kind {
        AnnotationKind::QuadsPicked => AnnotationEvent::QuadsPicked {
            player: group(caps, 1),
            count: count(caps, 2),
        },
        AnnotationKind::Badge(badge) => AnnotationEvent::Badge {
            player: group(caps, 1),
            badge,
        },
        AnnotationKind::HeadHunter => AnnotationEvent::HeadHunter {
            player: group(caps, 1),
            kills: count(caps, 2),
            leader: group(caps, 3),
        },
        AnnotationKind::Bully => AnnotationEvent::Bully {
            player: group(caps, 1),
            kills: count(caps, 2),
            victim: group(caps, 3),
        },
        AnnotationKind::Specialist => AnnotationEvent::Specialist {
            player: group(caps, 1),
            kills: count(caps, 2),
            weapon: WeaponId::from_name(&group(caps, 3)),
        },
        AnnotationKind::Award => AnnotationEvent::Award {
            player: group(caps, 1),
            award: group(caps, 2),
            value: count(caps, 3),
        },
    }
}
