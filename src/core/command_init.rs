//! Centralized initialization shared by every command.
//!
//! [`CommandInit`] resolves the configuration (file + command line overrides) and
//! builds the single HTTP client of the session. The resulting [`CommandContext`]
//! wires the index, loader, execution client and session controller from it.
//!
//! # Initialization Steps
//! 1. **Configuration**: Load `config.json` if present, apply `--repo`/`--branch`
//! 2. **Transport**: Build one shared HTTP client with the configured timeout
//! 3. **Index**: Fetched on demand, once per session

use crate::core::{
    config::CodeboxConfig,
    error::Result,
    execution::ExecutionClient,
    http::{HttpClient, ReqwestHttp},
    index::RepositoryIndex,
    loader::FileLoader,
    presentation::Presenter,
    session::SessionController,
};
use std::sync::Arc;

/// Everything a command needs to talk to the remote services
pub struct CommandContext {
    pub config: CodeboxConfig,
    pub http: Arc<dyn HttpClient>,
}

pub struct CommandInit;

impl CommandInit {
    pub fn initialize(repo: Option<&str>, branch: Option<&str>) -> Result<CommandContext> {
        let config = CodeboxConfig::load_or_default()?.with_overrides(repo, branch)?;
        log::debug!(
            "Using repository {}/{} on branch {}",
            config.repository.owner,
            config.repository.name,
            config.repository.branch
        );

        let http = ReqwestHttp::new(config.request_timeout())?;
        Ok(CommandContext {
            config,
            http: Arc::new(http),
        })
    }
}

impl CommandContext {
    pub fn new(config: CodeboxConfig, http: Arc<dyn HttpClient>) -> Self {
        Self { config, http }
    }

    pub async fn load_index(&self) -> Result<RepositoryIndex> {
        let entries = RepositoryIndex::load(self.http.as_ref(), &self.config.tree_url()).await?;
        Ok(RepositoryIndex::new(entries))
    }

    pub fn session<P: Presenter>(&self, presenter: P) -> SessionController<P> {
        let loader = FileLoader::new(
            Arc::clone(&self.http),
            self.config.raw_base_url(),
            self.config.info_extension.clone(),
        );
        let executor = ExecutionClient::new(
            Arc::clone(&self.http),
            self.config.endpoints.execute_url.clone(),
        );
        SessionController::new(presenter, loader, executor)
    }

    /// `owner/name` of the configured repository
    pub fn repository_label(&self) -> String {
        format!(
            "{}/{}",
            self.config.repository.owner, self.config.repository.name
        )
    }
}
