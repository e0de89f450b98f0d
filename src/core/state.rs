//! Session data structures.
//!
//! This module defines the plain data carried through the load/run pipeline. None
//! of these types talk to the network; they are produced by the index, loader and
//! execution client and owned by the session controller.
//!
//! # Public API
//! - [`FileEntry`]: One runnable file of the repository listing
//! - [`SelectionState`]: What is currently selected and displayed
//! - [`SessionPhase`]: Where the selection state machine is
//! - [`LoadTicket`]: Identity of one selection request
//! - [`LoadedFile`]: Result of a successful file load
//! - [`ExecutionResult`]: Parsed outcome of one run

use crate::core::file_kind::FileKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub path: String,
    pub kind: FileKind,
}

impl FileEntry {
    /// Build an entry from a blob path, `None` when the suffix is not runnable
    pub fn from_blob_path(path: impl Into<String>) -> Option<Self> {
        let path = path.into();
        let kind = FileKind::from_path(&path)?;
        Some(Self { path, kind })
    }

    /// Last path segment
    pub fn filename(&self) -> &str {
        crate::core::filter::extract_filename(&self.path)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub active_path: Option<String>,
    pub content: Option<String>,
    pub info_text: Option<String>,
    /// Incremented on every selection request
    pub load_generation: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Idle,
    Loading {
        path: String,
        generation: u64,
    },
    Loaded {
        path: String,
    },
    Failed {
        path: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub path: String,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFile {
    pub content: String,
    pub info_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    /// Interleaved stdout/stderr as reported by the service
    pub output: Option<String>,
    pub code: Option<i32>,
}

impl ExecutionResult {
    /// A non-empty stderr marks the run as failed, whatever stdout holds
    pub fn is_failure(&self) -> bool {
        self.stderr.as_deref().is_some_and(|s| !s.trim().is_empty())
    }

    /// Text to show for a successful run, `None` when the program printed nothing
    pub fn success_text(&self) -> Option<&str> {
        [self.stdout.as_deref(), self.output.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_entry_from_blob_path() {
        let entry = FileEntry::from_blob_path("a/Solution.py").unwrap();
        assert_eq!(entry.kind, FileKind::Python);
        assert_eq!(entry.filename(), "Solution.py");
        assert!(FileEntry::from_blob_path("a/notes.txt").is_none());
    }

    #[test]
    fn test_stderr_takes_precedence() {
        let result = ExecutionResult {
            stdout: Some("partial".to_string()),
            stderr: Some("Traceback...".to_string()),
            output: Some(String::new()),
            code: Some(1),
        };
        assert!(result.is_failure());
    }

    #[test]
    fn test_blank_stderr_is_not_failure() {
        let result = ExecutionResult {
            stdout: Some("42\n".to_string()),
            stderr: Some(String::new()),
            ..Default::default()
        };
        assert!(!result.is_failure());
        assert_eq!(result.success_text(), Some("42\n"));
    }

    #[test]
    fn test_success_text_falls_back_to_output() {
        let result = ExecutionResult {
            stdout: Some(String::new()),
            output: Some("hi\n".to_string()),
            ..Default::default()
        };
        assert_eq!(result.success_text(), Some("hi\n"));
        assert_eq!(ExecutionResult::default().success_text(), None);
    }
}
