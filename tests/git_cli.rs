#[cfg(all(test, unix))]
mod tests {
    use cedar::config::Config;
    use cedar::error::CedarError;
    use cedar::models::Branch;
    use cedar::sync::{self, GitCli, Vcs};

    #[test]
    fn successful_program_completes_the_chain() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            git_program: "true".to_string(),
            ..Config::default()
        };
        let branch = Branch::new("10-15-2026", dir.path().join("10-15-2026"));
        sync::sync(&GitCli::from_config(&config), &config, &branch, dir.path()).unwrap();
    }

    #[test]
    fn failing_program_stops_at_the_first_step() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            git_program: "false".to_string(),
            ..Config::default()
        };
        let err = sync::connect(
            &GitCli::from_config(&config),
            &config,
            "https://github.com/alice/journal.git",
            dir.path(),
        )
        .unwrap_err();

        match err {
            CedarError::RemoteSync { step, detail } => {
                assert_eq!(step, "init .");
                assert!(detail.contains("false exited with"));
            }
            other => panic!("expected RemoteSync, got {:?}", other),
        }
    }

    #[test]
    fn missing_program_is_a_sync_error() {
        let dir = tempfile::tempdir().unwrap();
        let vcs = GitCli::new("cedar-no-such-vcs-binary");
        let err = vcs.run(dir.path(), &["add", "."]).unwrap_err();
        assert!(matches!(err, CedarError::RemoteSync { ref detail, .. } if detail.contains("could not start")));
    }
}
