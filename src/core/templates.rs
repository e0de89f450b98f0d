//! Template system for consistent output formatting.
//!
//! Headings and fixed lines of every codebox screen are defined once in
//! [`TEMPLATES`] and rendered with [`render_template`], which substitutes the
//! placeholders of a [`TemplateContext`] in a single pass and then applies the
//! template's colors.
//!
//! # Public API
//! - [`Templates`]: Template definitions for all output sections
//! - [`TemplateContext`]: Context data for template rendering
//! - [`TEMPLATES`]: Global template instance
//! - [`render_template`]: Rendering with colors
//! - [`render_template_plain`]: Plain text rendering for testing
//! - [`strip_ansi_codes`]: Utility for removing color codes

use colored::*;

/// Template definitions for all output formatting
pub struct Templates {
    pub header_repository: &'static str,
    pub header_files: &'static str,
    pub header_files_search: &'static str,
    pub no_files_found: &'static str,
    pub section_editor: &'static str,
    pub section_info: &'static str,
    pub section_output: &'static str,
}

/// Global templates instance
pub static TEMPLATES: Templates = Templates {
    header_repository: "Repository: {repository} ({branch})",
    header_files: "➤ Files ({count}):",
    header_files_search: "➤ Files matching '{term}' ({count} of {total}):",
    no_files_found: "   No files found",
    section_editor: "➤ {path} [{mode}]",
    section_info: "➤ Details:",
    section_output: "➤ Output:",
};

/// Context for template rendering
#[derive(Debug, Default)]
pub struct TemplateContext<'a> {
    pub repository: Option<&'a str>,
    pub branch: Option<&'a str>,
    pub term: Option<&'a str>,
    pub path: Option<&'a str>,
    pub mode: Option<&'a str>,
    pub count: Option<usize>,
    pub total: Option<usize>,
}

impl TemplateContext<'_> {
    fn value(&self, placeholder: &str) -> Option<String> {
        match placeholder {
            "repository" => self.repository.map(str::to_string),
            "branch" => self.branch.map(str::to_string),
            "term" => self.term.map(str::to_string),
            "path" => self.path.map(str::to_string),
            "mode" => self.mode.map(str::to_string),
            "count" => self.count.map(|n| n.to_string()),
            "total" => self.total.map(|n| n.to_string()),
            _ => None,
        }
    }
}

/// Render a template with context and apply colors
pub fn render_template(template: &str, context: &TemplateContext) -> String {
    let mut text = String::with_capacity(template.len() + 64);
    render_template_single_pass(template, context, &mut text);
    apply_colors(&text, template)
}

/// Substitute known placeholders; unknown or unclosed ones are kept verbatim
fn render_template_single_pass(template: &str, context: &TemplateContext, output: &mut String) {
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            output.push(ch);
            continue;
        }

        let mut placeholder = String::new();
        let mut found_closing = false;
        for next_ch in chars.by_ref() {
            if next_ch == '}' {
                found_closing = true;
                break;
            }
            placeholder.push(next_ch);
        }

        match (found_closing, context.value(&placeholder)) {
            (true, Some(value)) => output.push_str(&value),
            (true, None) => {
                output.push('{');
                output.push_str(&placeholder);
                output.push('}');
            }
            (false, _) => {
                output.push('{');
                output.push_str(&placeholder);
            }
        }
    }
}

fn apply_colors(text: &str, template: &str) -> String {
    match template {
        t if t.starts_with("➤") => {
            let body = text.trim_start_matches('➤').trim_start();
            format!("{} {}", "➤".blue(), body.white().bold())
        }
        t if t.starts_with("Repository:") => text.bright_black().to_string(),
        t if t == TEMPLATES.no_files_found => text.bright_black().to_string(),
        _ => text.to_string(),
    }
}

/// Strip ANSI color codes for testing
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for ch in chars.by_ref() {
                if ch.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}

/// Render template without colors for testing
pub fn render_template_plain(template: &str, context: &TemplateContext) -> String {
    strip_ansi_codes(&render_template(template, context))
}
