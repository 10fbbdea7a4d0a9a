// src/commands.rs

use crate::branch;
use crate::cli::Action;
use crate::context::Context;
use crate::error::Result;
use crate::models::{Branch, Leaf};
use crate::storage;
use crate::sync::{self, Vcs};
use std::io::Write;

/// Makes sure today's branch exists, then carries out `action`.
pub fn run(ctx: &Context, action: Action, vcs: &dyn Vcs, out: &mut dyn Write) -> Result<()> {
    let journal_dir = ctx.journal_dir();
    storage::ensure_journal_dir(&journal_dir)?;
    let mut today = ctx.branch();
    storage::ensure_branch_file(&today.file_path)?;

    match action {
        Action::List => handle_list(&mut today, out),
        Action::Connect(url) => handle_connect(ctx, &url, vcs),
        Action::AddEntry(words) => handle_add(ctx, &today, &words, vcs),
    }
}

/// Handles listing: prints every leaf of the branch, oldest first.
pub fn handle_list(today: &mut Branch, out: &mut dyn Write) -> Result<()> {
    branch::read(today)?;
    for leaf in &today.leaves {
        writeln!(out, "{}", leaf)?;
    }
    out.flush()?;
    Ok(())
}

/// Handles a new entry: appends it to today's branch, then syncs.
pub fn handle_add(ctx: &Context, today: &Branch, words: &[String], vcs: &dyn Vcs) -> Result<()> {
    let leaf = Leaf::from_words(ctx.time(), words);
    branch::append(today, &leaf)?;
    sync::sync(vcs, &ctx.config, today, &ctx.journal_dir())
}

/// Handles connecting the journal to a remote.
pub fn handle_connect(ctx: &Context, url: &str, vcs: &dyn Vcs) -> Result<()> {
    sync::connect(vcs, &ctx.config, url, &ctx.journal_dir())
}
