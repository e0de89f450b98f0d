//! Codebox - browse a remote code repository, read files, and run them remotely.
//!
//! This library provides the core functionality of codebox: the repository
//! listing and its live filter, file and companion-info loading, remote
//! execution, and the session controller that keeps overlapping requests from
//! clobbering each other.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Repository listing and filtering
//! - File loading and remote execution clients
//! - The session controller and its presenter traits
//! - Error handling and result types
//! - UI templates and color system

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    // Error handling
    CodeboxError,
    Result,

    // Listing
    FileEntry,
    FileKind,
    RepositoryIndex,
    Target,

    // Remote services
    ExecutionClient,
    ExecutionResult,
    FileLoader,
    HttpClient,
    ReqwestHttp,

    // Session
    DisplaySurface,
    LoadOutcome,
    NotificationSink,
    Presenter,
    SessionController,
    Severity,

    // Command initialization
    CommandContext,
    CommandInit,

    // UI and formatting
    render_template,
    render_template_plain,
    strip_ansi_codes,
    TemplateContext,
    Templates,
    TEMPLATES,
};
