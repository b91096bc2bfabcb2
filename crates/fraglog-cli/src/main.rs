use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use fraglog_engine::{
    AnnotationEvent, AwardsReport, Classifier, LineEvent, MatchAnalyzer, MatchReport,
    is_system_message,
};
use serde::Serialize;

mod input;

use input::LineLoader;

#[derive(Parser)]
#[command(name = "fraglog")]
#[command(about = "Compute player stats and awards from deathmatch console logs")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate per-player statistics and print the match report as JSON
    Stats {
        /// Log file(s), concatenated in argument order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Aggregate, then derive every award and print the awards report
    Awards {
        /// Log file(s), concatenated in argument order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Diagnostic view: print each line's classification with its
    /// extracted fields, then a category summary on stderr
    Classify {
        /// Log file(s), concatenated in argument order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Stats { files, pretty } => cmd_stats(files, pretty),
        Commands::Awards { files, pretty } => cmd_awards(files, pretty),
        Commands::Classify { files, pretty } => cmd_classify(files, pretty),
    }
}

// ---------------------------------------------------------------------------
// Subcommand implementations
// ---------------------------------------------------------------------------

fn cmd_stats(files: Vec<PathBuf>, pretty: bool) {
    let report = build_report(&files);
    print_json(&report, pretty);
}

fn cmd_awards(files: Vec<PathBuf>, pretty: bool) {
    let report = build_report(&files);
    print_json(&AwardsReport::from_report(&report), pretty);
}

fn cmd_classify(files: Vec<PathBuf>, pretty: bool) {
    let lines = load_lines(&files);
    let classifier = build_classifier();

    let mut kills = 0u64;
    let mut suicides = 0u64;
    let mut annotations = 0u64;
    let mut noise = 0u64;
    let mut dropped = 0u64;

    for line in &lines {
        let diagnosis = match classifier.classify(line) {
            LineEvent::Kill {
                victim,
                killer,
                weapon,
            } => {
                kills += 1;
                LineDiagnosis {
                    victim: Some(victim),
                    killer: Some(killer),
                    weapon: Some(weapon.name().to_string()),
                    ..LineDiagnosis::bare("kill", line)
                }
            }
            LineEvent::Suicide { player } => {
                suicides += 1;
                LineDiagnosis {
                    player: Some(player),
                    ..LineDiagnosis::bare("suicide", line)
                }
            }
            LineEvent::Annotation(annotation) => {
                annotations += 1;
                diagnose_annotation(annotation, line)
            }
            LineEvent::Noise => {
                if is_system_message(line) {
                    dropped += 1;
                    LineDiagnosis::bare("dropped", line)
                } else {
                    noise += 1;
                    LineDiagnosis::bare("noise", line)
                }
            }
        };
        print_json(&diagnosis, pretty);
    }

    eprintln!(
        "Processed {} lines: {kills} kills, {suicides} suicides, \
         {annotations} annotations, {noise} noise, {dropped} dropped.",
        lines.len()
    );
}

// ---------------------------------------------------------------------------
// Classification diagnostics
// ---------------------------------------------------------------------------

/// One line of `classify` output: the category plus whatever fields the
/// matched rule extracted.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LineDiagnosis<'a> {
    category: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    victim: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    killer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    weapon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    player: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    award: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<String>,
    line: &'a str,
}

impl<'a> LineDiagnosis<'a> {
    /// A diagnosis with the category and line set and every field empty.
    fn bare(category: &'static str, line: &'a str) -> Self {
        LineDiagnosis {
            category,
            victim: None,
            killer: None,
            weapon: None,
            player: None,
            award: None,
            value: None,
            target: None,
            line,
        }
    }
}

fn diagnose_annotation(annotation: AnnotationEvent, line: &str) -> LineDiagnosis<'_> {
    match annotation {
        AnnotationEvent::QuadsPicked { player, count } => LineDiagnosis {
            player: Some(player),
            award: Some("quads".to_string()),
            value: Some(count),
            ..LineDiagnosis::bare("annotation", line)
        },
        AnnotationEvent::Badge { player, badge } => LineDiagnosis {
            player: Some(player),
            award: Some(badge.name().to_string()),
            ..LineDiagnosis::bare("annotation", line)
        },
        AnnotationEvent::HeadHunter {
            player,
            kills,
            leader,
        } => LineDiagnosis {
            player: Some(player),
            award: Some("Head Hunter".to_string()),
            value: Some(kills),
            target: Some(leader),
            ..LineDiagnosis::bare("annotation", line)
        },
        AnnotationEvent::Bully {
            player,
            kills,
            victim,
        } => LineDiagnosis {
            player: Some(player),
            award: Some("Bully".to_string()),
            value: Some(kills),
            target: Some(victim),
            ..LineDiagnosis::bare("annotation", line)
        },
        AnnotationEvent::Specialist {
            player,
            kills,
            weapon,
        } => LineDiagnosis {
            player: Some(player),
            award: Some("Specialist".to_string()),
            value: Some(kills),
            weapon: weapon.map(|w| w.name().to_string()),
            ..LineDiagnosis::bare("annotation", line)
        },
        AnnotationEvent::Award {
            player,
            award,
            value,
        } => LineDiagnosis {
            player: Some(player),
            award: Some(award),
            value: Some(value),
            ..LineDiagnosis::bare("annotation", line)
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Read every input file in argument order, stripping timestamps.
fn load_lines(files: &[PathBuf]) -> Vec<String> {
    let loader = match LineLoader::new() {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Error compiling timestamp pattern: {e}");
            process::exit(1);
        }
    };

    let mut lines = Vec::new();
    for path in files {
        match loader.load_file(path) {
            Ok(mut file_lines) => lines.append(&mut file_lines),
            Err(e) => {
                eprintln!("Error reading {}: {e}", path.display());
                process::exit(1);
            }
        }
    }
    lines
}

fn build_classifier() -> Classifier {
    match Classifier::with_builtin_rules() {
        Ok(classifier) => classifier,
        Err(e) => {
            eprintln!("Error compiling rules: {e}");
            process::exit(1);
        }
    }
}

/// Partition and aggregate the given files into a match report.
fn build_report(files: &[PathBuf]) -> MatchReport {
    let lines = load_lines(files);
    let classifier = build_classifier();
    let partition = classifier.partition_lines(&lines);
    MatchAnalyzer::new(classifier).analyze(&partition.game_lines, &partition.non_game_lines)
}

fn print_json(value: &impl Serialize, pretty: bool) {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    match json {
        Ok(j) => println!("{j}"),
        Err(e) => {
            eprintln!("JSON serialization error: {e}");
            process::exit(1);
        }
    }
}
