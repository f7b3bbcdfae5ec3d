//! Merge execution - effectful operations
//!
//! Takes a `MergePlan` (created by the pure planning functions) and
//! performs the merge via the platform API. Nothing in here fails the
//! run: rejections and errors are logged as warnings and reported back
//! as an `Outcome`.

use crate::merge::outcome::Outcome;
use crate::merge::plan::{MergePlan, build_merge_request};
use crate::platform::PlatformService;
use tracing::{debug, info, warn};

/// Options for merge execution
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeOptions {
    /// Evaluate and log, but do not call the merge endpoint
    pub dry_run: bool,
}

/// Execute the merge plan (EFFECTFUL)
pub async fn execute_merge(
    plan: &MergePlan,
    platform: &dyn PlatformService,
    options: MergeOptions,
) -> Outcome {
    let (pr_number, pr_title, body, method) = match plan {
        MergePlan::Skip { reason, .. } => {
            warn!("{reason}");
            return Outcome::GuardRejected(reason.clone());
        }
        MergePlan::Merge {
            pr_number,
            pr_title,
            body,
            method,
        } => (*pr_number, pr_title, body, method),
    };

    info!("Trying to merge #{pr_number}");

    let request = match build_merge_request(pr_number, pr_title, body.as_deref(), method.clone())
    {
        Ok(request) => request,
        Err(e) => {
            warn!("{e}");
            return Outcome::MergeErrored(e.to_string());
        }
    };

    let config = platform.config();
    info!(
        commit_title = %request.commit_title,
        owner = %config.owner,
        repo = %config.repo,
        pr_number,
        merge_method = %request.merge_method,
        "merge request prepared"
    );
    // The body is contributor text; at info it would reach the runner log
    // unescaped and any line starting with `::` would run as a command.
    debug!(commit_message = ?request.commit_message, "commit message");

    if options.dry_run {
        info!("dry run: not merging #{pr_number}");
        return Outcome::WouldMerge {
            pr_number,
            commit_title: request.commit_title,
        };
    }

    match platform.merge_pull_request(&request).await {
        Ok(response) if response.is_ok() => {
            if let Some(ref message) = response.data.message {
                info!("{message}");
            }
            Outcome::Merged {
                message: response.data.message,
            }
        }
        Ok(response) => {
            info!(status = response.status, "merge failed with status");
            let message = response
                .data
                .message
                .unwrap_or_else(|| format!("merge returned status {}", response.status));
            warn!("{message}");
            Outcome::MergeRejected(message)
        }
        Err(e) => {
            warn!("{e}");
            Outcome::MergeErrored(e.to_string())
        }
    }
}
