//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! # Output Format
//!
//! ## Rewrite (single input)
//!
//! The rewritten URL alone, so the command stays pipeable:
//!
//! ```text
//! /media/catalog/product/img.jpg?auto=webp&format=pjpg
//! ```
//!
//! ## Rewrite (multiple inputs)
//!
//! ```text
//! /a.jpg → /media/catalog/product/a.jpg?auto=webp&format=pjpg
//! /b.jpg → /media/catalog/product/b.jpg?auto=webp&format=pjpg
//! ```
//!
//! ## Check
//!
//! ```text
//! Media path:        /media
//! Backend origin:    https://cdn.origin:8000
//! Optimizing origin: backend
//! Srcset widths:     640, 960, 1280, 1600
//! ```

use crate::config::{MediaConfig, OptimizingOrigin};
use serde::Serialize;

/// One rewritten URL, ready for text or JSON display.
#[derive(Debug, Clone, Serialize)]
pub struct RewriteRecord {
    pub input: String,
    pub output: String,
}

/// Format rewrite results: bare output for a single record, `input → output`
/// lines for batches.
pub fn format_rewrite_output(records: &[RewriteRecord]) -> Vec<String> {
    match records {
        [single] => vec![single.output.clone()],
        many => many
            .iter()
            .map(|r| format!("{} → {}", r.input, r.output))
            .collect(),
    }
}

/// Format the resolved config summary for the `check` command.
pub fn format_check_output(config: &MediaConfig) -> Vec<String> {
    let origin = config.backend_origin.as_deref().unwrap_or("(unset)");
    let mode = match config.optimizing_origin {
        OptimizingOrigin::Onboard => "onboard",
        OptimizingOrigin::Backend => "backend",
    };
    let widths = config
        .srcset
        .widths
        .iter()
        .map(|w| w.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    vec![
        format!("Media path:        {}", config.media_path),
        format!("Backend origin:    {origin}"),
        format!("Optimizing origin: {mode}"),
        format!("Srcset widths:     {widths}"),
    ]
}

pub fn print_rewrite_output(records: &[RewriteRecord]) {
    for line in format_rewrite_output(records) {
        println!("{line}");
    }
}

pub fn print_check_output(config: &MediaConfig) {
    for line in format_check_output(config) {
        println!("{line}");
    }
}
