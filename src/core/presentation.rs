//! Interfaces between the session controller and whatever renders it.
//!
//! The controller never prints. It drives a [`DisplaySurface`] (the editor, info
//! and output panels) and a [`NotificationSink`] (transient messages). The terminal
//! implementation lives in [`crate::core::output`].

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(name)
    }
}

pub trait DisplaySurface {
    fn set_active_path(&mut self, path: Option<&str>);
    fn set_content(&mut self, text: &str);
    fn set_language_mode(&mut self, mode: &str);
    fn set_info(&mut self, text: &str);
    fn set_info_visible(&mut self, visible: bool);
    /// Output panel; `Error` styles it as a failed run
    fn set_output(&mut self, text: &str, severity: Severity);
    fn relayout(&mut self);
}

pub trait NotificationSink {
    fn notify(&mut self, message: &str, severity: Severity);
}

pub trait Presenter: DisplaySurface + NotificationSink {}

impl<T: DisplaySurface + NotificationSink> Presenter for T {}
