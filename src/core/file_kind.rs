//! Type-safe source file classification.
//!
//! This module defines [`FileKind`], the set of source languages codebox can list
//! and execute. Everything that depends on the language (the runtime name sent to
//! the execution service, its pinned version, the display language mode) hangs off
//! this enum so there is a single table to extend.
//!
//! # Public API
//! - [`FileKind`]: Recognized source file kinds
//! - [`PLAINTEXT_MODE`]: Display mode for content of unknown kind

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display language mode used when the kind cannot be determined
pub const PLAINTEXT_MODE: &str = "plaintext";

/// Source file kind, derived from the file suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileKind {
    /// Python source (.py)
    Python,
    /// Java source (.java)
    Java,
}

impl FileKind {
    pub const ALL: [FileKind; 2] = [FileKind::Python, FileKind::Java];

    /// Classify a path by its suffix, `None` for unrecognized files
    pub fn from_path(path: &str) -> Option<FileKind> {
        Self::ALL
            .into_iter()
            .find(|kind| path.ends_with(kind.suffix()))
    }

    /// File suffix including the leading dot
    pub fn suffix(&self) -> &'static str {
        match self {
            FileKind::Python => ".py",
            FileKind::Java => ".java",
        }
    }

    /// Language identifier understood by the execution service
    pub fn language(&self) -> &'static str {
        match self {
            FileKind::Python => "python",
            FileKind::Java => "java",
        }
    }

    /// Runtime version pinned for this language
    pub fn runtime_version(&self) -> &'static str {
        match self {
            FileKind::Python => "3.10.0",
            FileKind::Java => "15.0.2",
        }
    }

    /// Syntax mode for the display surface
    pub fn editor_mode(&self) -> &'static str {
        self.language()
    }

    /// Short label used in file listings
    pub fn label(&self) -> &'static str {
        match self {
            FileKind::Python => "py",
            FileKind::Java => "java",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.language())
    }
}

/// Display mode for an arbitrary path, falling back to plaintext
pub fn editor_mode_for(path: &str) -> &'static str {
    FileKind::from_path(path)
        .map(|kind| kind.editor_mode())
        .unwrap_or(PLAINTEXT_MODE)
}
