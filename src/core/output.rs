//! Unified output formatting utilities for consistent CLI presentation.
//!
//! This module provides the standard message printers used by every command and
//! [`TerminalPresenter`], the terminal implementation of the session's display
//! surface and notification sink.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, yellow for warnings, green for success
//! - **Standardized spacing**: Newline before and after all command outputs
//! - **Deferred drawing**: The editor panel is drawn on `relayout`, not on every setter

use crate::core::colors::format_file_line;
use crate::core::index::RepositoryIndex;
use crate::core::presentation::{DisplaySurface, NotificationSink, Severity};
use crate::core::templates::{render_template, TemplateContext, TEMPLATES};
use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a warning message
pub fn print_warning(message: &str) {
    println!("\n{} {}\n", "! Warning:".yellow(), message.white());
}

/// Formats and prints a success message with consistent styling
///
/// # Format
/// ```text
///
/// ✓ <message>
/// ```
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message
pub fn print_info(message: &str) {
    println!("\n{}", message.bright_black());
}

/// Formats and prints a section header with consistent styling
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// Print the filtered view of `index`, marking `active`
pub fn print_file_list(index: &RepositoryIndex, active: Option<&str>) {
    let filtered = index.filtered();
    let header = if index.is_searching() {
        let context = TemplateContext {
            term: Some(index.term()),
            count: Some(filtered.len()),
            total: Some(index.full().len()),
            ..Default::default()
        };
        render_template(TEMPLATES.header_files_search, &context)
    } else {
        let context = TemplateContext {
            count: Some(filtered.len()),
            ..Default::default()
        };
        render_template(TEMPLATES.header_files, &context)
    };
    println!("\n{header}\n");

    for (i, entry) in filtered.iter().enumerate() {
        let is_active = active == Some(entry.path.as_str());
        println!("{}", format_file_line(i + 1, entry, is_active));
    }

    if filtered.is_empty() && index.is_searching() {
        println!(
            "{}",
            render_template(TEMPLATES.no_files_found, &TemplateContext::default())
        );
    }
    println!();
}

/// Number each line with a right-aligned gutter, like an editor
pub fn format_numbered_lines(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.lines().collect();
    let width = lines.len().to_string().len();
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{:>width$} │ {}", i + 1, line))
        .collect()
}

/// Terminal implementation of the session presenter
#[derive(Debug, Default)]
pub struct TerminalPresenter {
    active_path: Option<String>,
    mode: String,
    content: String,
    info: String,
    info_visible: bool,
    /// Skip informational notifications (one-shot commands)
    quiet: bool,
}

impl TerminalPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::default()
        }
    }

    fn print_editor(&self, path: &str) {
        let context = TemplateContext {
            path: Some(path),
            mode: Some(&self.mode),
            ..Default::default()
        };
        println!("\n{}\n", render_template(TEMPLATES.section_editor, &context));
        for line in format_numbered_lines(&self.content) {
            println!("  {}", line.bright_white());
        }
    }

    fn print_info_panel(&self) {
        println!(
            "\n{}\n",
            render_template(TEMPLATES.section_info, &TemplateContext::default())
        );
        for line in self.info.lines() {
            println!("  {}", line.white());
        }
    }
}

impl DisplaySurface for TerminalPresenter {
    fn set_active_path(&mut self, path: Option<&str>) {
        self.active_path = path.map(str::to_string);
    }

    fn set_content(&mut self, text: &str) {
        self.content = text.to_string();
    }

    fn set_language_mode(&mut self, mode: &str) {
        self.mode = mode.to_string();
    }

    fn set_info(&mut self, text: &str) {
        self.info = text.to_string();
    }

    fn set_info_visible(&mut self, visible: bool) {
        self.info_visible = visible;
    }

    fn set_output(&mut self, text: &str, severity: Severity) {
        println!(
            "\n{}\n",
            render_template(TEMPLATES.section_output, &TemplateContext::default())
        );
        for line in text.lines() {
            let styled = match severity {
                Severity::Error => line.red(),
                Severity::Warning => line.yellow(),
                Severity::Success => line.white(),
                Severity::Info => line.bright_black(),
            };
            println!("  {styled}");
        }
    }

    fn relayout(&mut self) {
        // Nothing selected yet
        let Some(path) = self.active_path.as_deref() else {
            return;
        };
        self.print_editor(path);
        if self.info_visible {
            self.print_info_panel();
        }
    }
}

impl NotificationSink for TerminalPresenter {
    fn notify(&mut self, message: &str, severity: Severity) {
        match severity {
            Severity::Info if self.quiet => log::debug!("{message}"),
            Severity::Info => print_info(message),
            Severity::Success => print_success(message),
            Severity::Warning => print_warning(message),
            Severity::Error => print_error(message),
        }
    }
}
