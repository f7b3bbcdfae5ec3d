//! Platform service for the GitHub REST API
//!
//! Abstracts the two calls the merge flow makes so the flow can be
//! driven by a mock in tests.

mod github;

pub use github::{DEFAULT_API_URL, GitHubService};

use crate::error::Result;
use crate::types::{
    ApiResponse, MergeRequest, MergeResponseData, PlatformConfig, PullRequestSnapshot,
};
use async_trait::async_trait;

/// Platform service trait for pull request operations
///
/// Implementations report HTTP status alongside the decoded body rather
/// than turning non-success statuses into errors. `Err` is reserved for
/// transport failures and undecodable payloads.
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// Fetch the current state of a pull request
    ///
    /// `data` is `None` when the response body is empty (or `{}`).
    async fn get_pull_request(
        &self,
        pr_number: u64,
    ) -> Result<ApiResponse<Option<PullRequestSnapshot>>>;

    /// Merge a pull request
    async fn merge_pull_request(
        &self,
        request: &MergeRequest,
    ) -> Result<ApiResponse<MergeResponseData>>;

    /// Get the platform configuration
    fn config(&self) -> &PlatformConfig;
}
