//! Authoritative listing of runnable repository files.
//!
//! [`RepositoryIndex::load`] fetches the tree listing once per session. The index
//! built from it keeps the full list untouched and re-derives the filtered view
//! from `(full, term)` on every search.

use crate::core::error::FetchError;
use crate::core::filter::{filter, normalize_term};
use crate::core::http::{error_message, HttpClient};
use crate::core::state::FileEntry;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct TreeListing {
    tree: Vec<TreeItem>,
    #[serde(default)]
    truncated: bool,
}

#[derive(Debug, Deserialize)]
struct TreeItem {
    path: String,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Clone, Default)]
pub struct RepositoryIndex {
    full: Vec<FileEntry>,
    filtered: Vec<FileEntry>,
    term: String,
}

impl RepositoryIndex {
    /// Fetch the tree listing at `tree_url` and keep runnable blobs.
    ///
    /// Does not touch any index; the caller builds one with [`RepositoryIndex::new`].
    pub async fn load(http: &dyn HttpClient, tree_url: &str) -> Result<Vec<FileEntry>, FetchError> {
        log::debug!("Fetching repository listing from {tree_url}");
        let response = http.get(tree_url).await?;

        if !response.is_success() {
            let message = error_message(&response.body).unwrap_or_else(|| "request failed".to_string());
            return Err(FetchError::http(response.status, message));
        }

        let listing: TreeListing = serde_json::from_str(&response.body)
            .map_err(|e| FetchError::malformed(format!("invalid tree listing: {e}")))?;

        if listing.truncated {
            log::warn!("Repository listing was truncated by the server; some files may be missing");
        }

        let entries: Vec<FileEntry> = listing
            .tree
            .into_iter()
            .filter(|item| item.kind == "blob")
            .filter_map(|item| FileEntry::from_blob_path(item.path))
            .collect();

        log::debug!("Repository listing has {} runnable files", entries.len());
        Ok(entries)
    }

    pub fn new(full: Vec<FileEntry>) -> Self {
        Self {
            filtered: full.clone(),
            full,
            term: String::new(),
        }
    }

    /// Replace the search term and re-derive the filtered view
    pub fn search(&mut self, term: &str) {
        self.term = normalize_term(term);
        self.filtered = filter(&self.full, &self.term);
        log::debug!(
            "Search '{}' matched {}/{} files",
            self.term,
            self.filtered.len(),
            self.full.len()
        );
    }

    pub fn clear_search(&mut self) {
        self.search("");
    }

    pub fn full(&self) -> &[FileEntry] {
        &self.full
    }

    pub fn filtered(&self) -> &[FileEntry] {
        &self.filtered
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_searching(&self) -> bool {
        !self.term.is_empty()
    }

    pub fn find(&self, path: &str) -> Option<&FileEntry> {
        self.full.iter().find(|entry| entry.path == path)
    }

    /// 1-based lookup into the filtered view
    pub fn entry_at(&self, index: usize) -> Option<&FileEntry> {
        index.checked_sub(1).and_then(|i| self.filtered.get(i))
    }
}
