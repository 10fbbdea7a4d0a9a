// src/cli.rs

use clap::Parser;
use lazy_static::lazy_static;
use regex::Regex;

#[derive(Parser, Debug)]
#[command(
    name = "cedar",
    about = "cedar - a day journal for the command line",
    long_about = "With no arguments, cedar prints today's entries. With a single GitHub repository URL, it connects the journal to that remote. Anything else is written as a new entry for today and synced.",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Entry text, or a repository URL to connect.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,
}

/// What a single invocation does, decided from the shape of its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print today's entries.
    List,
    /// Connect the journal to a remote repository.
    Connect(String),
    /// Record the words as a new entry, then sync.
    AddEntry(Vec<String>),
}

lazy_static! {
    static ref REMOTE_URL: Regex =
        Regex::new(r"^https://github.com/.+.git").expect("remote URL pattern should compile");
}

pub fn is_remote_url(arg: &str) -> bool {
    REMOTE_URL.is_match(arg)
}

impl Action {
    /// A lone argument that looks like a remote URL always means Connect,
    /// even if it was meant as entry text. A URL followed by more words is
    /// entry text.
    pub fn classify(words: Vec<String>) -> Action {
        match words.as_slice() {
            [] => Action::List,
            [only] if is_remote_url(only) => Action::Connect(only.clone()),
            _ => Action::AddEntry(words),
        }
    }
}

impl Cli {
    pub fn action(self) -> Action {
        Action::classify(self.words)
    }
}
