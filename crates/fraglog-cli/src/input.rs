//! Input loading: file reading and timestamp stripping.

use std::fs;
use std::io;
use std::path::Path;

use regex::Regex;

/// Leading timestamp token some server configurations prepend to every line.
const TIMESTAMP_PREFIX: &str = r"^\[\d{4}-\d{2}-\d{2} \d{2}:\d{2}\] ";

/// Reads log files line by line, stripping timestamp prefixes.
pub struct LineLoader {
    timestamp: Regex,
}

impl LineLoader {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(LineLoader {
            timestamp: Regex::new(TIMESTAMP_PREFIX)?,
        })
    }

    /// Read one file and return its non-empty lines with timestamps removed.
    pub fn load_file(&self, path: &Path) -> io::Result<Vec<String>> {
        let contents = fs::read_to_string(path)?;
        Ok(contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| self.strip_timestamp(line).to_string())
            .collect())
    }

    /// Remove the leading timestamp token, if present.
    pub fn strip_timestamp<'a>(&self, line: &'a str) -> &'a str {
        match self.timestamp.find(line) {
            Some(m) => &line[m.end()..],
            None => line,
        }
    }
}
