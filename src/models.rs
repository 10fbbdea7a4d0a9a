// src/models.rs

use std::fmt;
use std::path::PathBuf;

/// Separator between a leaf's time and text on disk.
pub const DELIMITER: &str = "->";

/// One day's log. The file at `file_path` is the source of truth; `leaves` is
/// only filled in by `branch::read`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub date: String,
    pub file_path: PathBuf,
    pub leaves: Vec<Leaf>,
}

impl Branch {
    pub fn new(date: impl Into<String>, file_path: impl Into<PathBuf>) -> Self {
        Branch {
            date: date.into(),
            file_path: file_path.into(),
            leaves: Vec::new(),
        }
    }
}

/// A single timestamped entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    pub time: String,
    pub text: String,
}

impl Leaf {
    pub fn new(time: impl Into<String>, text: impl Into<String>) -> Self {
        Leaf {
            time: time.into(),
            text: text.into(),
        }
    }

    /// Builds a leaf from command-line words joined by single spaces. Line
    /// breaks become spaces so the leaf stays on one line.
    pub fn from_words<S: AsRef<str>>(time: impl Into<String>, words: &[S]) -> Self {
        let text = words
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ")
            .replace(['\r', '\n'], " ");
        Leaf::new(time, text)
    }

    /// `<time> -> <text>`, without the trailing newline.
    pub fn to_line(&self) -> String {
        format!("{} {} {}", self.time, DELIMITER, self.text)
    }

    /// Splits a stored line on the first delimiter. The single space the
    /// writer puts on each side of the delimiter is dropped; nothing else is
    /// trimmed.
    pub fn parse_line(line: &str) -> Option<Leaf> {
        let (time, text) = line.split_once(DELIMITER)?;
        let time = time.strip_suffix(' ').unwrap_or(time);
        let text = text.strip_prefix(' ').unwrap_or(text);
        Some(Leaf::new(time, text))
    }
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}
