//! Parsing of user-provided file targets.
//!
//! Commands name a file either by its number in the listing (`3`) or by its
//! repository path (`a/Solution.py`). [`Target`] parses that argument and
//! resolves it against a [`RepositoryIndex`].
//!
//! # Supported Formats
//! - **Index**: `3`, 1-based over the current (possibly searched) listing
//! - **Path**: anything that is not a plain number

use crate::core::error::{CodeboxError, Result};
use crate::core::index::RepositoryIndex;
use crate::core::state::FileEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Index(usize),
    Path(String),
}

impl Target {
    pub fn parse(input: &str) -> Target {
        let input = input.trim();
        match input.parse::<usize>() {
            Ok(n) => Target::Index(n),
            Err(_) => Target::Path(input.trim_start_matches('/').to_string()),
        }
    }

    /// Resolve against the filtered view (indices) or the full list (paths)
    pub fn resolve<'a>(&self, index: &'a RepositoryIndex) -> Result<&'a FileEntry> {
        match self {
            Target::Index(n) => {
                Self::validate(*n, index.filtered().len())?;
                index
                    .entry_at(*n)
                    .ok_or_else(|| CodeboxError::index_out_of_range(*n, index.filtered().len()))
            }
            Target::Path(path) => index
                .find(path)
                .ok_or_else(|| CodeboxError::file_not_in_index(path.as_str())),
        }
    }

    pub fn validate(n: usize, max_index: usize) -> Result<()> {
        if max_index == 0 {
            return Err(CodeboxError::NoFilesAvailable);
        }
        if n == 0 {
            return Err(CodeboxError::ZeroIndex);
        }
        if n > max_index {
            return Err(CodeboxError::index_out_of_range(n, max_index));
        }
        Ok(())
    }
}
