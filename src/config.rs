//! Action inputs, resolved once at startup

use crate::error::{Error, Result};
use crate::types::MergeMethod;

/// Label that opts a pull request into automatic merging
pub const DEFAULT_AUTOMERGE_LABEL: &str = "automerge";

/// Label that vetoes a merge; empty means no real label ever matches
pub const DEFAULT_BLOCK_LABEL: &str = "";

/// Settings for one run of the action
///
/// Built once from the raw inputs and passed by reference through the
/// whole decision procedure.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    /// API token
    pub token: String,
    /// Label required for a merge
    pub automerge_label: String,
    /// Label that blocks a merge
    pub block_label: String,
    /// Merge method passed to the API
    pub merge_method: MergeMethod,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("token", &"***")
            .field("automerge_label", &self.automerge_label)
            .field("block_label", &self.block_label)
            .field("merge_method", &self.merge_method)
            .finish()
    }
}

/// Raw action inputs as they arrive from the runner
///
/// GitHub passes every declared input, so an input left blank in the
/// workflow shows up as an empty string rather than being absent.
#[derive(Debug, Clone, Default)]
pub struct RawInputs {
    /// `GITHUB_TOKEN`
    pub token: Option<String>,
    /// `AUTOMERGE`
    pub automerge_label: Option<String>,
    /// `LABEL`
    pub block_label: Option<String>,
    /// `MERGE_METHOD`
    pub merge_method: Option<String>,
}

impl Settings {
    /// Resolve settings, applying defaults to absent or empty inputs
    ///
    /// The merge method is not validated here; GitHub decides.
    pub fn resolve(inputs: RawInputs) -> Result<Self> {
        let token = non_empty(inputs.token)
            .ok_or_else(|| Error::Config("input GITHUB_TOKEN is required".to_string()))?;

        let merge_method = non_empty(inputs.merge_method)
            .map_or_else(MergeMethod::default, MergeMethod::new);

        Ok(Self {
            token,
            automerge_label: non_empty(inputs.automerge_label)
                .unwrap_or_else(|| DEFAULT_AUTOMERGE_LABEL.to_string()),
            block_label: non_empty(inputs.block_label)
                .unwrap_or_else(|| DEFAULT_BLOCK_LABEL.to_string()),
            merge_method,
        })
    }
}

/// Trim an input the way the runner's input helper does; blank means unset
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
