// src/context.rs

use crate::config::{Config, DATE_FORMAT, TIME_FORMAT};
use crate::error::{CedarError, Result};
use crate::models::Branch;
use chrono::{Local, NaiveDateTime};
use std::path::PathBuf;

/// Everything a run needs to know about its surroundings, read once at
/// startup and passed down explicitly.
#[derive(Debug, Clone)]
pub struct Context {
    pub home: PathBuf,
    pub now: NaiveDateTime,
    pub config: Config,
}

impl Context {
    pub fn new(home: impl Into<PathBuf>, now: NaiveDateTime, config: Config) -> Self {
        Context {
            home: home.into(),
            now,
            config,
        }
    }

    /// Reads the home directory and the local wall clock.
    pub fn from_env(config: Config) -> Result<Self> {
        let home = dirs::home_dir().ok_or(CedarError::HomeDirNotFound)?;
        Ok(Context::new(home, Local::now().naive_local(), config))
    }

    pub fn date(&self) -> String {
        self.now.format(DATE_FORMAT).to_string()
    }

    pub fn time(&self) -> String {
        self.now.format(TIME_FORMAT).to_string()
    }

    pub fn journal_dir(&self) -> PathBuf {
        self.home.join(&self.config.journal_dir_name)
    }

    /// Today's branch. Its leaves are not loaded.
    pub fn branch(&self) -> Branch {
        let date = self.date();
        let file_path = self.journal_dir().join(&date);
        Branch::new(date, file_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed() -> Context {
        let now = NaiveDate::from_ymd_opt(2026, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 1)
            .unwrap();
        Context::new("/home/alice", now, Config::default())
    }

    #[test]
    fn formats_date_and_time_with_padding() {
        let ctx = fixed();
        assert_eq!(ctx.date(), "03-07-2026");
        assert_eq!(ctx.time(), "09:05:01");
    }

    #[test]
    fn branch_lives_in_journal_dir_named_by_date() {
        let ctx = fixed();
        assert_eq!(ctx.journal_dir(), PathBuf::from("/home/alice/.cedar"));
        let branch = ctx.branch();
        assert_eq!(branch.date, "03-07-2026");
        assert_eq!(branch.file_path, PathBuf::from("/home/alice/.cedar/03-07-2026"));
        assert!(branch.leaves.is_empty());
    }
}
