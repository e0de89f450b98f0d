//! Color system for file listings.
//!
//! Each [`FileKind`] has one color used for its label and path in every listing.
//!
//! # Color Scheme
//! - **Python**: Yellow
//! - **Java**: Red
//! - **Active file**: Green bold marker

use crate::core::file_kind::FileKind;
use crate::core::state::FileEntry;
use colored::*;

/// Returns a closure that applies the color of `kind` to any text
pub fn get_kind_color_style(kind: FileKind) -> Box<dyn Fn(&str) -> ColoredString> {
    match kind {
        FileKind::Python => Box::new(|text: &str| text.yellow()),
        FileKind::Java => Box::new(|text: &str| text.red()),
    }
}

/// Kind label padded to a fixed width so file names line up
pub fn get_aligned_label(kind: FileKind) -> ColoredString {
    let color_fn = get_kind_color_style(kind);
    color_fn(&format!("{:<4}", kind.label()))
}

pub fn get_colored_path(kind: FileKind, path: &str) -> ColoredString {
    let color_fn = get_kind_color_style(kind);
    color_fn(path)
}

/// One line of the file list: `   [n] label  Filename  dir/Filename`
pub fn format_file_line(n: usize, entry: &FileEntry, active: bool) -> String {
    let marker = if active {
        "▸".green().bold()
    } else {
        " ".normal()
    };
    let name = if active {
        entry.filename().white().bold()
    } else {
        entry.filename().white()
    };
    format!(
        " {} [{}] {} {}  {}",
        marker,
        n,
        get_aligned_label(entry.kind),
        name,
        get_colored_path(entry.kind, &entry.path).dimmed()
    )
}
