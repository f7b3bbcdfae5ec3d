//! How a run ended

use crate::merge::plan::GuardRejection;

/// Terminal state of one automerge run
///
/// Only `FetchFailed` fails the run; every other variant is a successful
/// exit even when nothing was merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Event payload referenced no pull request
    NoPullRequest,
    /// Snapshot fetch returned a non-200 status or no data
    FetchFailed(String),
    /// A guard refused to merge
    GuardRejected(GuardRejection),
    /// Dry run: every guard passed, merge not attempted
    WouldMerge {
        /// PR number
        pr_number: u64,
        /// Commit title that would have been used
        commit_title: String,
    },
    /// The merge endpoint accepted the merge
    Merged {
        /// Message returned by the API
        message: Option<String>,
    },
    /// The merge endpoint answered with a non-200 status
    MergeRejected(String),
    /// Building or sending the merge request failed
    MergeErrored(String),
}

impl Outcome {
    /// Whether the run should be reported as failed
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::FetchFailed(_))
    }

    /// Whether a merge actually happened
    pub const fn is_merged(&self) -> bool {
        matches!(self, Self::Merged { .. })
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPullRequest => {
                write!(f, "Could not get pull request information from context")
            }
            Self::FetchFailed(reason) => write!(f, "{reason}"),
            Self::GuardRejected(reason) => write!(f, "{reason}"),
            Self::WouldMerge {
                pr_number,
                commit_title,
            } => write!(f, "would merge #{pr_number} as '{commit_title}'"),
            Self::Merged { message } => {
                write!(f, "{}", message.as_deref().unwrap_or("Pull Request merged"))
            }
            Self::MergeRejected(message) | Self::MergeErrored(message) => write!(f, "{message}"),
        }
    }
}
