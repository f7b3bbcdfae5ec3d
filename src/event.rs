//! Invocation context: repository and triggering event payload
//!
//! The runner describes the triggering event in a JSON file and the
//! repository in `owner/repo` form. Only the pull request references
//! are decoded; everything else in the payload is ignored.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Pull request reference inside an event payload
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct PullRequestRef {
    /// PR number; missing, null and zero all mean "no number"
    #[serde(default)]
    pub number: Option<u64>,
}

impl PullRequestRef {
    fn usable_number(&self) -> Option<u64> {
        self.number.filter(|n| *n != 0)
    }
}

/// Check suite part of a `check_suite` event
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct CheckSuite {
    /// Pull requests associated with the suite, in delivery order
    #[serde(default)]
    pub pull_requests: Option<Vec<PullRequestRef>>,
}

/// The subset of an event payload the resolver reads
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct EventPayload {
    /// Present on `pull_request` events
    #[serde(default)]
    pub pull_request: Option<PullRequestRef>,
    /// Present on `check_suite` events
    #[serde(default)]
    pub check_suite: Option<CheckSuite>,
}

/// Everything the run knows about where and why it was invoked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionContext {
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Triggering event payload
    pub payload: EventPayload,
}

impl ActionContext {
    /// Build a context from an `owner/repo` string and an event file
    ///
    /// A missing event file yields an empty payload; an unreadable or
    /// malformed one is an error.
    pub fn load(repository: &str, event_path: Option<&Path>) -> Result<Self> {
        let (owner, repo) = parse_repository(repository)?;

        let payload = match event_path {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(path).map_err(|e| {
                    Error::Event(format!("failed to read {}: {e}", path.display()))
                })?;
                serde_json::from_str(&content).map_err(|e| {
                    Error::Event(format!("failed to parse {}: {e}", path.display()))
                })?
            }
            Some(path) => {
                warn!(path = %path.display(), "event payload file does not exist");
                EventPayload::default()
            }
            None => {
                debug!("no event payload path given");
                EventPayload::default()
            }
        };

        Ok(Self {
            owner,
            repo,
            payload,
        })
    }
}

/// Split `owner/repo` into its two parts
pub fn parse_repository(repository: &str) -> Result<(String, String)> {
    let trimmed = repository.trim();
    match trimmed.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(Error::Event(format!(
            "repository must be in 'owner/repo' form, got '{repository}'"
        ))),
    }
}

/// Find the pull request number this run is about
///
/// A direct `pull_request` reference wins. Otherwise the first check
/// suite pull request with a nonzero number is used.
pub fn resolve_pull_request(payload: &EventPayload) -> Option<u64> {
    if let Some(number) = payload
        .pull_request
        .as_ref()
        .and_then(PullRequestRef::usable_number)
    {
        return Some(number);
    }

    payload
        .check_suite
        .as_ref()
        .and_then(|suite| suite.pull_requests.as_deref())
        .and_then(|prs| prs.iter().find_map(PullRequestRef::usable_number))
}
