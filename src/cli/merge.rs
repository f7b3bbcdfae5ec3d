//! Merge command - merge the event's pull request if it qualifies

use crate::cli::Cli;
use crate::cli::context::CommandContext;
use anyhow::Context;
use label_automerge::merge::{MergeOptions, Outcome, run_automerge};
use tracing::debug;

/// Run the merge command
pub async fn run_merge(cli: Cli) -> anyhow::Result<Outcome> {
    let ctx = CommandContext::new(&cli).context("failed to set up the action")?;
    debug!(settings = ?ctx.settings, "resolved settings");

    let options = MergeOptions {
        dry_run: cli.dry_run,
    };

    let outcome = run_automerge(&ctx.action, &ctx.settings, ctx.platform.as_ref(), options)
        .await
        .context("automerge run failed")?;

    debug!(?outcome, merged = outcome.is_merged(), "run finished");
    Ok(outcome)
}
