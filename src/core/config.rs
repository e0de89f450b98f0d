use crate::core::dirs::get_config_file;
use crate::core::error::{CodeboxError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RepositoryConfig {
    pub owner: String,
    pub name: String,
    pub branch: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            owner: "vladflore".to_string(),
            name: "coding-challenges".to_string(),
            branch: "refactor".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct EndpointConfig {
    pub tree_api_base: String,
    pub raw_content_base: String,
    pub execute_url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            tree_api_base: "https://api.github.com".to_string(),
            raw_content_base: "https://raw.githubusercontent.com".to_string(),
            execute_url: "https://emkc.org/api/v2/piston/execute".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CodeboxConfig {
    pub repository: RepositoryConfig,
    pub endpoints: EndpointConfig,
    /// Extension of the sibling document describing a source file
    pub info_extension: String,
    pub request_timeout_secs: Option<u64>,
}

impl Default for CodeboxConfig {
    fn default() -> Self {
        Self {
            repository: RepositoryConfig::default(),
            endpoints: EndpointConfig::default(),
            info_extension: "md".to_string(),
            request_timeout_secs: Some(30),
        }
    }
}

impl CodeboxConfig {
    /// Read the user config file, or defaults when there is none. Never writes.
    pub fn load_or_default() -> Result<Self> {
        let config_file = get_config_file();
        if config_file.exists() {
            Self::load_from(&config_file)
        } else {
            log::debug!("No config file at {}, using defaults", config_file.display());
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        log::debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path)
            .map_err(|e| CodeboxError::config_read_failed(path, e))?;
        serde_json::from_str(&content).map_err(|e| CodeboxError::config_parse_failed(path, e))
    }

    /// Apply `--repo OWNER/NAME` and `--branch` command line overrides
    pub fn with_overrides(mut self, repo: Option<&str>, branch: Option<&str>) -> Result<Self> {
        if let Some(repo) = repo {
            let (owner, name) = repo
                .split_once('/')
                .filter(|(owner, name)| !owner.is_empty() && !name.is_empty() && !name.contains('/'))
                .ok_or_else(|| CodeboxError::invalid_repository(repo))?;
            self.repository.owner = owner.to_string();
            self.repository.name = name.to_string();
        }
        if let Some(branch) = branch {
            self.repository.branch = branch.to_string();
        }
        Ok(self)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Tree-listing endpoint for the configured repository and branch
    pub fn tree_url(&self) -> String {
        let repo = &self.repository;
        format!(
            "{}/repos/{}/{}/git/trees/{}?recursive=1",
            self.endpoints.tree_api_base.trim_end_matches('/'),
            repo.owner,
            repo.name,
            repo.branch
        )
    }

    /// Raw-content prefix; a file's URL is this prefix, a slash and its path
    pub fn raw_base_url(&self) -> String {
        let repo = &self.repository;
        format!(
            "{}/{}/{}/{}",
            self.endpoints.raw_content_base.trim_end_matches('/'),
            repo.owner,
            repo.name,
            repo.branch
        )
    }
}
