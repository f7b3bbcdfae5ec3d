//! Mock platform service for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use label_automerge::error::{Error, Result};
use label_automerge::platform::PlatformService;
use label_automerge::types::{
    ApiResponse, MergeRequest, MergeResponseData, PlatformConfig, PullRequestSnapshot,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// Simple mock platform service for testing
///
/// This manually implements `PlatformService` rather than using mockall.
///
/// Features:
/// - Configurable status and data per PR
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockPlatformService {
    config: PlatformConfig,
    // Responses
    pull_request_responses: Mutex<HashMap<u64, (u16, Option<PullRequestSnapshot>)>>,
    merge_responses: Mutex<HashMap<u64, (u16, MergeResponseData)>>,
    // Call tracking
    get_pull_request_calls: Mutex<Vec<u64>>,
    merge_calls: Mutex<Vec<MergeRequest>>,
    // Error injection
    error_on_get: Mutex<Option<String>>,
    error_on_merge: Mutex<Option<String>>,
}

impl MockPlatformService {
    /// Create a new mock with the given config
    pub fn with_config(config: PlatformConfig) -> Self {
        Self {
            config,
            pull_request_responses: Mutex::new(HashMap::new()),
            merge_responses: Mutex::new(HashMap::new()),
            get_pull_request_calls: Mutex::new(Vec::new()),
            merge_calls: Mutex::new(Vec::new()),
            error_on_get: Mutex::new(None),
            error_on_merge: Mutex::new(None),
        }
    }

    // === Error injection methods ===

    /// Make `get_pull_request` return a transport error
    pub fn fail_get(&self, msg: &str) {
        *self.error_on_get.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `merge_pull_request` return a transport error
    pub fn fail_merge(&self, msg: &str) {
        *self.error_on_merge.lock().unwrap() = Some(msg.to_string());
    }

    // === Response setup ===

    /// Set the raw response for `get_pull_request`
    pub fn set_pull_request_response(
        &self,
        pr_number: u64,
        status: u16,
        snapshot: Option<PullRequestSnapshot>,
    ) {
        self.pull_request_responses
            .lock()
            .unwrap()
            .insert(pr_number, (status, snapshot));
    }

    /// Set a 200 response carrying `snapshot`
    pub fn set_snapshot(&self, pr_number: u64, snapshot: PullRequestSnapshot) {
        self.set_pull_request_response(pr_number, 200, Some(snapshot));
    }

    /// Set the response for `merge_pull_request`
    pub fn set_merge_response(&self, pr_number: u64, status: u16, message: &str) {
        self.merge_responses.lock().unwrap().insert(
            pr_number,
            (
                status,
                MergeResponseData {
                    merged: status == 200,
                    sha: (status == 200).then(|| format!("merged_sha_{pr_number}")),
                    message: Some(message.to_string()),
                },
            ),
        );
    }

    // === Call verification methods ===

    /// Get all PR numbers `get_pull_request` was called with
    pub fn get_pull_request_calls(&self) -> Vec<u64> {
        self.get_pull_request_calls.lock().unwrap().clone()
    }

    /// Get all merge requests that were sent
    pub fn get_merge_calls(&self) -> Vec<MergeRequest> {
        self.merge_calls.lock().unwrap().clone()
    }

    /// Assert that a merge was requested for a specific PR
    pub fn assert_merge_called(&self, pr_number: u64) {
        let calls = self.get_merge_calls();
        assert!(
            calls.iter().any(|c| c.pr_number == pr_number),
            "Expected merge_pull_request({pr_number}) but got: {calls:?}"
        );
    }

    /// Assert that no merge was requested at all
    pub fn assert_merge_not_called(&self) {
        let calls = self.get_merge_calls();
        assert!(
            calls.is_empty(),
            "Expected merge_pull_request NOT to be called but it was: {calls:?}"
        );
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn get_pull_request(
        &self,
        pr_number: u64,
    ) -> Result<ApiResponse<Option<PullRequestSnapshot>>> {
        self.get_pull_request_calls.lock().unwrap().push(pr_number);

        // Check for injected error
        if let Some(msg) = self.error_on_get.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        let responses = self.pull_request_responses.lock().unwrap();
        let (status, data) = responses.get(&pr_number).cloned().unwrap_or((404, None));
        Ok(ApiResponse { status, data })
    }

    async fn merge_pull_request(
        &self,
        request: &MergeRequest,
    ) -> Result<ApiResponse<MergeResponseData>> {
        self.merge_calls.lock().unwrap().push(request.clone());

        // Check for injected error
        if let Some(msg) = self.error_on_merge.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        let responses = self.merge_responses.lock().unwrap();
        responses
            .get(&request.pr_number)
            .cloned()
            .map(|(status, data)| ApiResponse { status, data })
            .ok_or_else(|| {
                Error::GitHubApi(format!(
                    "merge_pull_request: no response configured for PR #{}",
                    request.pr_number
                ))
            })
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
