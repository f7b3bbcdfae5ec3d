//! Command-line interface
//!
//! Every flag falls back to the environment variable the Actions runner
//! sets, so the binary runs unchanged as an action step or by hand.

mod context;
pub mod logging;
mod merge;

pub use merge::run_merge;

use clap::Parser;
use label_automerge::platform::DEFAULT_API_URL;
use std::path::PathBuf;

/// Merge pull requests labelled for automerge
#[derive(Debug, Parser)]
#[command(name = "automerge", version, about)]
pub struct Cli {
    /// Token used to call the GitHub API
    #[arg(long, env = "INPUT_GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Label that must be present for the PR to be merged [default: automerge]
    #[arg(long, env = "INPUT_AUTOMERGE")]
    pub automerge_label: Option<String>,

    /// Label that blocks the merge when present
    #[arg(long, env = "INPUT_LABEL")]
    pub block_label: Option<String>,

    /// Merge method: merge, squash or rebase [default: squash]
    #[arg(long, env = "INPUT_MERGE_METHOD")]
    pub merge_method: Option<String>,

    /// Repository in owner/repo form
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: String,

    /// Path to the triggering event payload
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Check the guards and log the merge without performing it
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
