// src/config.rs

/// Date format used for branch file names, e.g. `10-15-2026`.
pub const DATE_FORMAT: &str = "%m-%d-%Y";
/// Time format stamped on each leaf, e.g. `09:00:00`.
pub const TIME_FORMAT: &str = "%H:%M:%S";

pub const CONNECT_COMMIT_MESSAGE: &str = "initial cedar repo setup";

pub fn sync_commit_message(date: &str) -> String {
    format!("new log entry for {}", date)
}

/// Settings a run is carried out with. There is no config file; callers start
/// from `Config::default()` and tests override fields directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Journal directory name, relative to the home directory.
    pub journal_dir_name: String,
    /// Version-control client to spawn.
    pub git_program: String,
    pub remote: String,
    pub primary_branch: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            journal_dir_name: ".cedar".to_string(),
            git_program: "git".to_string(),
            remote: "origin".to_string(),
            primary_branch: "master".to_string(),
        }
    }
}
