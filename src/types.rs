//! Core types for label-automerge

use serde::{Deserialize, Serialize};

/// A label attached to a pull request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Label {
    /// Label name
    pub name: String,
}

/// Pull request state as fetched from the API, before any guard runs
///
/// Every field the guards look at is optional: GitHub may omit or null
/// them, and the guards compare strictly rather than by truthiness.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequestSnapshot {
    /// PR number
    #[serde(default)]
    pub number: u64,
    /// PR title
    #[serde(default)]
    pub title: String,
    /// PR body/description
    #[serde(default)]
    pub body: Option<String>,
    /// `"open"` or `"closed"`
    #[serde(default)]
    pub state: Option<String>,
    /// Whether PR can be merged (no conflicts)
    /// - `Some(true)` = mergeable
    /// - `Some(false)` = has conflicts
    /// - `None` = unknown (GitHub still computing)
    #[serde(default)]
    pub mergeable: Option<bool>,
    /// Whether the PR was already merged
    #[serde(default)]
    pub merged: Option<bool>,
    /// Labels on the PR (absent when GitHub omits the field)
    #[serde(default)]
    pub labels: Option<Vec<Label>>,
}

/// An API response with its HTTP status preserved
///
/// The decision procedure branches on the status itself, so the adapter
/// hands it back instead of turning non-2xx into an error.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// HTTP status code
    pub status: u16,
    /// Decoded body
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Whether the status is exactly 200 OK
    pub const fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Body of a merge response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MergeResponseData {
    /// Whether the merge happened
    #[serde(default)]
    pub merged: bool,
    /// The SHA of the merge commit (if successful)
    #[serde(default)]
    pub sha: Option<String>,
    /// Message from the merge operation (especially on failure)
    #[serde(default)]
    pub message: Option<String>,
}

/// A fully built merge request for one pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeRequest {
    /// PR number to merge
    #[serde(skip)]
    pub pr_number: u64,
    /// Commit title
    pub commit_title: String,
    /// Commit message
    pub commit_message: String,
    /// Merge method
    pub merge_method: MergeMethod,
}

/// Merge strategy/method, sent to the API exactly as configured
///
/// GitHub accepts `merge`, `squash` and `rebase`. Anything else is still
/// passed through and comes back as a rejected merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MergeMethod(String);

impl MergeMethod {
    /// Wrap a configured merge method
    pub fn new(method: impl Into<String>) -> Self {
        Self(method.into())
    }

    /// Squash all commits into one
    pub fn squash() -> Self {
        Self::new("squash")
    }

    /// Create a merge commit
    pub fn merge() -> Self {
        Self::new("merge")
    }

    /// Rebase commits onto base branch
    pub fn rebase() -> Self {
        Self::new("rebase")
    }

    /// The method as sent on the wire
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MergeMethod {
    fn default() -> Self {
        Self::squash()
    }
}

impl std::fmt::Display for MergeMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Repository the action runs against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// REST API base URL (`https://api.github.com` unless GitHub Enterprise)
    pub api_url: String,
}
