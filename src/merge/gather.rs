//! Full automerge run: gather, plan, execute

use crate::config::Settings;
use crate::error::Result;
use crate::event::{ActionContext, resolve_pull_request};
use crate::merge::execute::{MergeOptions, execute_merge};
use crate::merge::outcome::Outcome;
use crate::merge::plan::create_merge_plan;
use crate::platform::PlatformService;
use tracing::{debug, info, warn};

/// Decide whether to merge the pull request behind this event, and merge it
///
/// Returns `Err` only for failures outside the merge attempt (transport
/// or decode errors while fetching). A fetch with a non-200 status or
/// empty data is reported as `Outcome::FetchFailed`.
pub async fn run_automerge(
    context: &ActionContext,
    settings: &Settings,
    platform: &dyn PlatformService,
    options: MergeOptions,
) -> Result<Outcome> {
    debug!("repository: {}/{}", context.owner, context.repo);

    // =========================================================================
    // Phase 1: GATHER
    // =========================================================================

    let Some(pr_number) = resolve_pull_request(&context.payload) else {
        let outcome = Outcome::NoPullRequest;
        warn!("{outcome}");
        return Ok(outcome);
    };
    info!("pull request number: {pr_number}");

    info!("automerge label is {}", settings.automerge_label);
    info!("block label is {}", settings.block_label);
    info!("merge method is {}", settings.merge_method);

    let response = platform.get_pull_request(pr_number).await?;
    debug!(status = response.status, "pull request response");

    let snapshot = match response.data {
        Some(snapshot) if response.status == 200 => snapshot,
        _ => {
            return Ok(Outcome::FetchFailed(format!(
                "Could not get pull request information from API (status {})",
                response.status
            )));
        }
    };
    info!(
        snapshot_number = snapshot.number,
        "retrieved data for pull request #{pr_number}"
    );
    info!("pull request mergeable: {:?}", snapshot.mergeable);
    info!("pull request merged: {:?}", snapshot.merged);
    info!("pull request state: {:?}", snapshot.state);

    // =========================================================================
    // Phase 2: PLAN
    // =========================================================================

    let plan = create_merge_plan(pr_number, &snapshot, settings);
    debug!(%plan, "merge plan");

    // =========================================================================
    // Phase 3: EXECUTE
    // =========================================================================

    Ok(execute_merge(&plan, platform, options).await)
}
