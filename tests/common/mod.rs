//! Shared test helpers

#![allow(dead_code)]

mod mock_platform;

pub use mock_platform::MockPlatformService;

use label_automerge::config::Settings;
use label_automerge::event::{ActionContext, CheckSuite, EventPayload, PullRequestRef};
use label_automerge::types::{Label, MergeMethod, PlatformConfig, PullRequestSnapshot};

/// Platform config for a test repository
pub fn github_config() -> PlatformConfig {
    PlatformConfig {
        owner: "test".to_string(),
        repo: "repo".to_string(),
        api_url: "https://api.github.com".to_string(),
    }
}

/// Settings with defaults and the given block label
pub fn settings_with_block(block_label: &str) -> Settings {
    Settings {
        token: "test-token".to_string(),
        automerge_label: "automerge".to_string(),
        block_label: block_label.to_string(),
        merge_method: MergeMethod::squash(),
    }
}

/// Settings matching the action defaults
pub fn default_settings() -> Settings {
    settings_with_block("")
}

/// Build a label list
pub fn labels(names: &[&str]) -> Option<Vec<Label>> {
    Some(
        names
            .iter()
            .map(|name| Label {
                name: (*name).to_string(),
            })
            .collect(),
    )
}

/// An open, mergeable, unmerged PR with the given labels
pub fn mergeable_snapshot(number: u64, label_names: &[&str]) -> PullRequestSnapshot {
    PullRequestSnapshot {
        number,
        title: "Add feature".to_string(),
        body: Some("Fixes bug.\n## PR Checklist\n- [ ] item".to_string()),
        state: Some("open".to_string()),
        mergeable: Some(true),
        merged: Some(false),
        labels: labels(label_names),
    }
}

/// Payload of a `pull_request` event
pub fn pull_request_payload(number: u64) -> EventPayload {
    EventPayload {
        pull_request: Some(PullRequestRef {
            number: Some(number),
        }),
        check_suite: None,
    }
}

/// Payload of a `check_suite` event
pub fn check_suite_payload(numbers: &[Option<u64>]) -> EventPayload {
    EventPayload {
        pull_request: None,
        check_suite: Some(CheckSuite {
            pull_requests: Some(
                numbers
                    .iter()
                    .map(|number| PullRequestRef { number: *number })
                    .collect(),
            ),
        }),
    }
}

/// Context for the test repository
pub fn action_context(payload: EventPayload) -> ActionContext {
    ActionContext {
        owner: "test".to_string(),
        repo: "repo".to_string(),
        payload,
    }
}
