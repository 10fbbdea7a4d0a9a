//! cedar keeps a personal journal as one plain-text file per day under
//! `~/.cedar`, and can keep that directory synced with a git remote.
//!
//! Each entry ("leaf") is a single `HH:MM:SS -> text` line appended to the
//! day's file ("branch").

pub mod branch;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod models;
pub mod storage;
pub mod sync;
