//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{
    ApiResponse, MergeRequest, MergeResponseData, PlatformConfig, PullRequestSnapshot,
};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Default REST endpoint for github.com
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = "label-automerge";

/// GitHub service using reqwest
pub struct GitHubService {
    config: PlatformConfig,
    /// Token for API requests
    token: String,
    http_client: Client,
    base_url: Url,
}

impl GitHubService {
    /// Create a new GitHub service
    pub fn new(token: &str, config: PlatformConfig) -> Result<Self> {
        // A trailing slash keeps `Url::join` from dropping the last path
        // segment (GitHub Enterprise serves the API under `/api/v3`).
        let normalized = format!("{}/", config.api_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalized)
            .map_err(|e| Error::Config(format!("invalid API URL '{}': {e}", config.api_url)))?;

        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::GitHubApi(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            config,
            token: token.to_string(),
            http_client,
            base_url,
        })
    }

    fn pulls_url(&self, pr_number: u64, suffix: &str) -> Result<Url> {
        let path = format!(
            "repos/{}/{}/pulls/{pr_number}{suffix}",
            self.config.owner, self.config.repo
        );
        self.base_url
            .join(&path)
            .map_err(|e| Error::GitHubApi(format!("Failed to build URL for {path}: {e}")))
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
    }
}

/// Read a response body as JSON, treating an empty body as `null`
async fn read_json(response: Response) -> Result<Value> {
    let text = response.text().await?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&text)?)
}

fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn get_pull_request(
        &self,
        pr_number: u64,
    ) -> Result<ApiResponse<Option<PullRequestSnapshot>>> {
        debug!(pr_number, "fetching pull request");
        let url = self.pulls_url(pr_number, "")?;

        let response = self
            .authorized(self.http_client.get(url))
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to fetch pull request: {e}")))?;
        let status = response.status().as_u16();

        if status != 200 {
            debug!(pr_number, status, "pull request fetch returned non-200");
            return Ok(ApiResponse { status, data: None });
        }

        let body = read_json(response).await?;
        let data = if is_empty_payload(&body) {
            None
        } else {
            Some(serde_json::from_value::<PullRequestSnapshot>(body).map_err(|e| {
                Error::GitHubApi(format!("Failed to parse pull request #{pr_number}: {e}"))
            })?)
        };

        debug!(pr_number, status, has_data = data.is_some(), "fetched pull request");
        Ok(ApiResponse { status, data })
    }

    async fn merge_pull_request(
        &self,
        request: &MergeRequest,
    ) -> Result<ApiResponse<MergeResponseData>> {
        let pr_number = request.pr_number;
        debug!(pr_number, method = %request.merge_method, "merging pull request");
        let url = self.pulls_url(pr_number, "/merge")?;

        let response = self
            .authorized(self.http_client.put(url))
            .json(request)
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("Merge failed: {e}")))?;
        let status = response.status().as_u16();

        // Error bodies still carry a `message`; anything else decodes to defaults
        let data = match read_json(response).await {
            Ok(body) if !is_empty_payload(&body) => {
                serde_json::from_value(body).unwrap_or_default()
            }
            _ => MergeResponseData::default(),
        };

        debug!(
            pr_number,
            status,
            merged = data.merged,
            sha = ?data.sha,
            "merge request complete"
        );
        Ok(ApiResponse { status, data })
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
