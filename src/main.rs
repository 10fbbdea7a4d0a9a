// src/main.rs

use cedar::cli::Cli;
use cedar::commands;
use cedar::config::Config;
use cedar::context::Context;
use cedar::error::Result;
use cedar::logging;
use cedar::sync::GitCli;
use clap::Parser;
use std::io;
use std::process;

fn main() {
    logging::init();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        tracing::debug!(error = ?err, "cedar failed");
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let ctx = Context::from_env(Config::default())?;
    let vcs = GitCli::from_config(&ctx.config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::run(&ctx, cli.action(), &vcs, &mut out)
}
