//! Fetching of a single file and its optional info document.

use crate::core::error::LoadError;
use crate::core::http::HttpClient;
use crate::core::state::LoadedFile;
use reqwest::Url;
use std::sync::Arc;

pub struct FileLoader {
    http: Arc<dyn HttpClient>,
    raw_base: String,
    info_extension: String,
}

impl FileLoader {
    /// `raw_base` is the repository/branch prefix, without a trailing slash
    pub fn new(
        http: Arc<dyn HttpClient>,
        raw_base: impl Into<String>,
        info_extension: impl Into<String>,
    ) -> Self {
        Self {
            http,
            raw_base: raw_base.into(),
            info_extension: info_extension.into(),
        }
    }

    /// Download URL of `path`, each segment percent-encoded
    pub fn raw_url(&self, path: &str) -> Result<String, LoadError> {
        let invalid = |message: String| LoadError::InvalidUrl {
            path: path.to_string(),
            message,
        };

        let mut url = Url::parse(&self.raw_base).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid(format!("'{}' cannot be a base URL", self.raw_base)))?
            .pop_if_empty()
            .extend(path.trim_start_matches('/').split('/'));
        Ok(url.into())
    }

    /// Sibling info document path: same directory and base name, info extension
    pub fn info_path(&self, path: &str) -> String {
        let name_start = path.rfind('/').map_or(0, |i| i + 1);
        let stem = match path[name_start..].rfind('.') {
            // ".hidden" has no extension to replace
            Some(dot) if dot > 0 => &path[..name_start + dot],
            _ => path,
        };
        format!("{stem}.{}", self.info_extension)
    }

    /// Fetch content and info concurrently; the result is produced once both settle.
    ///
    /// A failed info fetch is not an error: `info_text` is `None`.
    pub async fn load_file(&self, path: &str) -> Result<LoadedFile, LoadError> {
        let content_url = self.raw_url(path)?;
        let info_url = self.raw_url(&self.info_path(path))?;
        log::debug!("Loading {path} (info: {info_url})");

        let (content, info) = tokio::join!(self.http.get(&content_url), self.http.get(&info_url));

        let content = content.map_err(|e| LoadError::network(path, e))?;
        if !content.is_success() {
            return Err(LoadError::content_unavailable(path, content.status));
        }

        let info_text = match info {
            Ok(response) if response.is_success() => Some(response.body),
            Ok(response) => {
                log::debug!("No info document for {path} (HTTP {})", response.status);
                None
            }
            Err(e) => {
                log::warn!("Info document for {path} could not be fetched: {e}");
                None
            }
        };

        Ok(LoadedFile {
            content: content.body,
            info_text,
        })
    }
}
