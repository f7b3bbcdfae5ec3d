//! Shared setup for the merge command

use crate::cli::Cli;
use label_automerge::config::{RawInputs, Settings};
use label_automerge::error::Result;
use label_automerge::event::ActionContext;
use label_automerge::platform::{GitHubService, PlatformService};
use label_automerge::types::PlatformConfig;

/// Everything the merge command needs, built once from the CLI
///
/// - Resolving settings from action inputs
/// - Loading the repository and event payload
/// - Creating the platform service
pub struct CommandContext {
    /// Resolved action settings
    pub settings: Settings,
    /// Repository and event payload
    pub action: ActionContext,
    /// Platform service (GitHub)
    pub platform: Box<dyn PlatformService>,
}

impl CommandContext {
    /// Create a new command context
    pub fn new(cli: &Cli) -> Result<Self> {
        let settings = Settings::resolve(RawInputs {
            token: cli.token.clone(),
            automerge_label: cli.automerge_label.clone(),
            block_label: cli.block_label.clone(),
            merge_method: cli.merge_method.clone(),
        })?;

        let action = ActionContext::load(&cli.repository, cli.event_path.as_deref())?;

        let platform = GitHubService::new(
            &settings.token,
            PlatformConfig {
                owner: action.owner.clone(),
                repo: action.repo.clone(),
                api_url: cli.api_url.clone(),
            },
        )?;

        Ok(Self {
            settings,
            action,
            platform: Box::new(platform),
        })
    }
}
