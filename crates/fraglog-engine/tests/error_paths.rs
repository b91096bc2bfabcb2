use fraglog_engine::{Classifier, EngineError};
use fraglog_rules::{AnnotationKind, LineRule, WeaponId};

#[test]
fn invalid_regex_surfaces_at_add_time() {
    let mut classifier = Classifier::with_builtin_rules().unwrap();
    let rule = LineRule::kill(r"(.+) was zapped by ([unclosed", WeaponId::Railgun);
    let err = classifier.add_rule(&rule).unwrap_err();
    assert!(
        matches!(err, EngineError::InvalidPattern { .. }),
        "expected InvalidPattern, got: {err}"
    );
}

#[test]
fn kill_rule_without_two_captures_is_rejected() {
    let mut classifier = Classifier::new();
    let rule = LineRule::kill(r"(.+) was zapped", WeaponId::Railgun);
    let err = classifier.add_rule(&rule).unwrap_err();
    assert!(
        matches!(
            err,
            EngineError::MissingCaptures {
                required: 2,
                found: 1,
                ..
            }
        ),
        "expected MissingCaptures, got: {err}"
    );
}

#[test]
fn suicide_rule_without_a_capture_is_rejected() {
    let mut classifier = Classifier::new();
    let rule = LineRule::suicide(r"somebody tripped a mine");
    let err = classifier.add_rule(&rule).unwrap_err();
    assert!(
        matches!(
            err,
            EngineError::MissingCaptures {
                required: 1,
                found: 0,
                ..
            }
        ),
        "expected MissingCaptures, got: {err}"
    );
}

#[test]
fn award_annotation_needs_three_captures() {
    let mut classifier = Classifier::new();
    let rule = LineRule::annotation(r"(.+) gets an award", AnnotationKind::Award);
    let err = classifier.add_rule(&rule).unwrap_err();
    assert!(
        matches!(
            err,
            EngineError::MissingCaptures {
                required: 3,
                found: 1,
                ..
            }
        ),
        "expected MissingCaptures, got: {err}"
    );
}

#[test]
fn rejected_rules_leave_the_classifier_usable() {
    let mut classifier = Classifier::with_builtin_rules().unwrap();
    let before = classifier.rule_count();

    let bad = LineRule::kill(r"broken [", WeaponId::Blaster);
    assert!(classifier.add_rule(&bad).is_err());
    assert_eq!(classifier.rule_count(), before);

    // The builtin table still classifies.
    assert_ne!(
        classifier.classify("A was railed by B"),
        fraglog_engine::LineEvent::Noise
    );
}

#[test]
fn error_messages_name_the_offending_pattern() {
    let mut classifier = Classifier::new();
    let rule = LineRule::suicide(r"no groups here");
    let err = classifier.add_rule(&rule).unwrap_err();
    let text = err.to_string();
    assert!(text.contains("no groups here"), "message was: {text}");
}
