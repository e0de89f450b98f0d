//! Core functionality for the codebox tool.
//!
//! This module provides the building blocks for browsing a remote repository,
//! loading files, running them remotely, error handling, and UI components.

pub mod colors;
pub mod command_init;
pub mod config;
pub mod dirs;
pub mod error;
pub mod execution;
pub mod file_kind;
pub mod filter;
pub mod http;
pub mod index;
pub mod loader;
pub mod output;
pub mod presentation;
pub mod session;
pub mod state;
pub mod target;
pub mod templates;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{CodeboxError, FetchError, LoadError, Result, RunError, RunRejected};

// === File kinds ===
// Type-safe language table replacing string suffix checks
pub use file_kind::FileKind;

// === State management ===
// Listing entries, the selection and execution results
pub use state::{ExecutionResult, FileEntry, SelectionState, SessionPhase};

// === Remote services ===
// Transport seam plus the three clients built on it
pub use execution::{ExecutionClient, ExecutionRequest};
pub use http::{HttpClient, HttpResponse, ReqwestHttp};
pub use index::RepositoryIndex;
pub use loader::FileLoader;

// === Session ===
// Generation-guarded selection and single-flight execution
pub use presentation::{DisplaySurface, NotificationSink, Presenter, Severity};
pub use session::{LoadOutcome, RunJob, RunReport, SessionController};

// === Target parsing ===
// "3" or "dir/File.py" -> a file of the listing
pub use target::Target;

// === Command initialization ===
// Centralized configuration and client setup shared by all commands
pub use command_init::{CommandContext, CommandInit};

// === UI templates ===
// Template system for consistent output formatting with colors
pub use templates::{
    render_template, render_template_plain, strip_ansi_codes, TemplateContext, Templates, TEMPLATES,
};

// === Color system ===
// One color per file kind across every listing
pub use colors::{format_file_line, get_aligned_label, get_colored_path, get_kind_color_style};

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{
    print_error, print_file_list, print_info, print_section_header, print_success, print_warning,
    TerminalPresenter,
};
