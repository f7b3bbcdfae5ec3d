//! Merge planning - pure functions for deciding whether to merge
//!
//! This module contains the guard sequence and commit message rules.
//! No I/O happens here - the snapshot and settings are passed in, making
//! every exit path easy to unit test.

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::types::{MergeMethod, MergeRequest, PullRequestSnapshot};
use regex::Regex;
use std::sync::LazyLock;

/// Heading that starts the contributor checklist; it and everything after
/// it are dropped from the commit message.
static CHECKLIST_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)## PR Checklist.*").expect("Failed to compile checklist regex")
});

/// Why a guard refused to merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardRejection {
    /// The automerge label is not on the PR
    MissingAutomergeLabel {
        /// Label that was looked for
        label: String,
    },
    /// The block label is on the PR
    BlockLabelPresent {
        /// Label that was found
        label: String,
    },
    /// PR is closed, already merged, or not (yet) mergeable
    NotMergeable {
        /// Reported state
        state: Option<String>,
        /// Reported mergeability
        mergeable: Option<bool>,
        /// Reported merged flag
        merged: Option<bool>,
    },
}

impl std::fmt::Display for GuardRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingAutomergeLabel { .. } => {
                write!(f, "Pull request does not have the automerge label")
            }
            Self::BlockLabelPresent { .. } => {
                write!(f, "Pull request has the work-in-progress label")
            }
            Self::NotMergeable { .. } => write!(f, "Pull Request is not in a mergeable state"),
        }
    }
}

/// Merge plan - the functional core output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergePlan {
    /// Every guard passed
    Merge {
        /// PR number (as resolved from the event)
        pr_number: u64,
        /// PR title
        pr_title: String,
        /// PR body, still unprocessed
        body: Option<String>,
        /// Merge method to use
        method: MergeMethod,
    },
    /// A guard refused
    Skip {
        /// PR number
        pr_number: u64,
        /// First guard that failed
        reason: GuardRejection,
    },
}

impl std::fmt::Display for MergePlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Merge {
                pr_number,
                pr_title,
                method,
                ..
            } => write!(f, "{method} PR #{pr_number}: {pr_title}"),
            Self::Skip { pr_number, reason } => write!(f, "skip PR #{pr_number}: {reason}"),
        }
    }
}

/// Check whether the snapshot carries a label with exactly this name
///
/// Comparison is case-sensitive. A snapshot without a labels field never
/// matches.
pub fn has_label(snapshot: &PullRequestSnapshot, name: &str) -> bool {
    snapshot
        .labels
        .as_deref()
        .is_some_and(|labels| labels.iter().any(|label| label.name == name))
}

/// Run the guards in order, stopping at the first failure
pub fn check_guards(
    snapshot: &PullRequestSnapshot,
    settings: &Settings,
) -> std::result::Result<(), GuardRejection> {
    if !has_label(snapshot, &settings.automerge_label) {
        return Err(GuardRejection::MissingAutomergeLabel {
            label: settings.automerge_label.clone(),
        });
    }

    if has_label(snapshot, &settings.block_label) {
        return Err(GuardRejection::BlockLabelPresent {
            label: settings.block_label.clone(),
        });
    }

    let is_open = snapshot.state.as_deref() == Some("open");
    if !is_open || snapshot.mergeable != Some(true) || snapshot.merged != Some(false) {
        return Err(GuardRejection::NotMergeable {
            state: snapshot.state.clone(),
            mergeable: snapshot.mergeable,
            merged: snapshot.merged,
        });
    }

    Ok(())
}

/// Create a merge plan (PURE - no I/O, easily testable)
///
/// `pr_number` is the number resolved from the event, which is what the
/// commit title references.
#[must_use]
pub fn create_merge_plan(
    pr_number: u64,
    snapshot: &PullRequestSnapshot,
    settings: &Settings,
) -> MergePlan {
    match check_guards(snapshot, settings) {
        Ok(()) => MergePlan::Merge {
            pr_number,
            pr_title: snapshot.title.clone(),
            body: snapshot.body.clone(),
            method: settings.merge_method.clone(),
        },
        Err(reason) => MergePlan::Skip { pr_number, reason },
    }
}

/// Commit title: `{title} (#{number})`
pub fn commit_title(title: &str, pr_number: u64) -> String {
    format!("{title} (#{pr_number})")
}

/// Drop the `## PR Checklist` section and trim surrounding whitespace
pub fn strip_checklist(body: &str) -> String {
    CHECKLIST_SECTION.replace_all(body, "").trim().to_string()
}

/// Build the request sent to the merge endpoint
///
/// Fails when the PR has no body, since there is nothing to derive the
/// commit message from.
pub fn build_merge_request(
    pr_number: u64,
    pr_title: &str,
    body: Option<&str>,
    method: MergeMethod,
) -> Result<MergeRequest> {
    let body = body.ok_or(Error::MissingBody(pr_number))?;

    Ok(MergeRequest {
        pr_number,
        commit_title: commit_title(pr_title, pr_number),
        commit_message: strip_checklist(body),
        merge_method: method,
    })
}
