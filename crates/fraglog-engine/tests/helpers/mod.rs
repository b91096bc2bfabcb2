use fraglog_engine::{AwardsReport, Classifier, MatchAnalyzer, MatchReport};

pub fn analyze(lines: &[&str]) -> MatchReport {
    let classifier = Classifier::with_builtin_rules().unwrap();
    let partition = classifier.partition_lines(lines);
    MatchAnalyzer::new(classifier).analyze(&partition.game_lines, &partition.non_game_lines)
}

pub fn awards(lines: &[&str]) -> AwardsReport {
    AwardsReport::from_report(&analyze(lines))
}
