// src/sync.rs

use crate::config::{self, Config};
use crate::error::{CedarError, Result};
use crate::models::Branch;
use std::path::Path;
use std::process::Command;

/// Runs one version-control step inside a working directory.
pub trait Vcs {
    fn run(&self, dir: &Path, args: &[&str]) -> Result<()>;
}

/// The `git` command-line client, invoked as `git -C <dir> <args>`.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
}

impl GitCli {
    pub fn new(program: impl Into<String>) -> Self {
        GitCli {
            program: program.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        GitCli::new(config.git_program.clone())
    }
}

impl Vcs for GitCli {
    fn run(&self, dir: &Path, args: &[&str]) -> Result<()> {
        let step = args.join(" ");
        tracing::debug!(program = %self.program, dir = %dir.display(), %step, "running");

        let output = Command::new(&self.program)
            .arg("-C")
            .arg(dir)
            .args(args)
            .output()
            .map_err(|err| CedarError::RemoteSync {
                step: step.clone(),
                detail: format!("could not start {}: {}", self.program, err),
            })?;

        if !output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);
            let mut detail = String::new();
            if !stdout.trim().is_empty() {
                detail.push_str(stdout.trim_end());
                detail.push('\n');
            }
            if !stderr.trim().is_empty() {
                detail.push_str(stderr.trim_end());
                detail.push('\n');
            }
            detail.push_str(&format!("{} exited with {}", self.program, output.status));
            return Err(CedarError::RemoteSync { step, detail });
        }
        Ok(())
    }
}

fn run_chain(vcs: &dyn Vcs, dir: &Path, steps: &[Vec<&str>]) -> Result<()> {
    for args in steps {
        vcs.run(dir, args)?;
    }
    Ok(())
}

/// Turns the journal directory into a repository tracking `url` and pushes
/// everything in it. Meant to run once; a second run fails at `init` or
/// `remote add` and that failure is returned as is.
pub fn connect(vcs: &dyn Vcs, config: &Config, url: &str, dir: &Path) -> Result<()> {
    let steps = vec![
        vec!["init", "."],
        vec!["remote", "add", config.remote.as_str(), url],
        vec!["add", "."],
        vec!["commit", "-m", config::CONNECT_COMMIT_MESSAGE],
        vec!["push", config.remote.as_str(), config.primary_branch.as_str()],
    ];
    run_chain(vcs, dir, &steps)?;
    tracing::info!(%url, "connected journal to remote");
    Ok(())
}

/// Commits the journal for `branch`'s day, pulls, then pushes. Conflicts are
/// left to the user.
pub fn sync(vcs: &dyn Vcs, config: &Config, branch: &Branch, dir: &Path) -> Result<()> {
    let message = config::sync_commit_message(&branch.date);
    let steps = vec![
        vec!["add", "."],
        vec!["commit", "-m", message.as_str()],
        vec!["pull", config.remote.as_str(), config.primary_branch.as_str()],
        vec!["push", config.remote.as_str(), config.primary_branch.as_str()],
    ];
    run_chain(vcs, dir, &steps)?;
    tracing::info!(date = %branch.date, "synced journal");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    /// Records every step and fails the one at `fail_at`, if set.
    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<String>>,
        fail_at: Option<usize>,
    }

    impl Vcs for Recorder {
        fn run(&self, _dir: &Path, args: &[&str]) -> Result<()> {
            let mut calls = self.calls.borrow_mut();
            let step = args.join(" ");
            calls.push(step.clone());
            if self.fail_at == Some(calls.len() - 1) {
                return Err(CedarError::RemoteSync {
                    step,
                    detail: "boom".to_string(),
                });
            }
            Ok(())
        }
    }

    #[test]
    fn connect_runs_the_full_chain_in_order() {
        let vcs = Recorder::default();
        connect(&vcs, &Config::default(), "https://github.com/alice/journal.git", &PathBuf::from("/j")).unwrap();
        assert_eq!(
            *vcs.calls.borrow(),
            vec![
                "init .",
                "remote add origin https://github.com/alice/journal.git",
                "add .",
                "commit -m initial cedar repo setup",
                "push origin master",
            ]
        );
    }

    #[test]
    fn sync_commits_with_the_branch_date() {
        let vcs = Recorder::default();
        let branch = Branch::new("04-01-2026", "/j/04-01-2026");
        sync(&vcs, &Config::default(), &branch, &PathBuf::from("/j")).unwrap();
        assert_eq!(
            *vcs.calls.borrow(),
            vec![
                "add .",
                "commit -m new log entry for 04-01-2026",
                "pull origin master",
                "push origin master",
            ]
        );
    }

    #[test]
    fn failing_step_stops_the_chain() {
        let vcs = Recorder {
            fail_at: Some(2),
            ..Default::default()
        };
        let branch = Branch::new("04-01-2026", "/j/04-01-2026");
        let err = sync(&vcs, &Config::default(), &branch, &PathBuf::from("/j")).unwrap_err();

        assert!(matches!(err, CedarError::RemoteSync { ref step, .. } if step == "pull origin master"));
        assert_eq!(vcs.calls.borrow().len(), 3);
    }
}
