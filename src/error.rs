//! Error types for the md2pdf library.
//!
//! Only *fatal* conditions live here — the ones that stop a conversion from
//! producing any PDF at all (unreadable source, missing stylesheet, staging
//! write failure). A failed remote rendering call is deliberately NOT an
//! error: the pipeline degrades to an empty fragment and still produces a
//! document, so that outcome is carried in
//! [`crate::output::RemoteOutcome`] instead of being thrown.
//!
//! Tool failures sit in between: captured in
//! [`crate::output::ToolOutcome`] by default, promoted to
//! [`Md2PdfError::ToolFailed`] only when the caller opts into strict mode.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the md2pdf library.
#[derive(Debug, Error)]
pub enum Md2PdfError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Source file was not found at the given path.
    #[error("Markdown file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the source file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The source file exists but could not be read (e.g. not valid UTF-8).
    #[error("Failed to read '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Assembly errors ───────────────────────────────────────────────────
    /// The configured stylesheet path could not be read.
    ///
    /// The stylesheet is not optional: a PDF without the document chrome is
    /// not the document the caller asked for.
    #[error("Failed to read stylesheet '{path}': {source}\nPass a readable CSS file or use the bundled default.")]
    StylesheetUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not write the staged HTML document.
    #[error("Failed to write staged HTML '{path}': {source}")]
    StagingWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No home directory could be resolved for the staged HTML file.
    #[error("Could not determine a home directory for the staged HTML file.\nSet an explicit working directory in the configuration.")]
    NoHomeDirectory,

    // ── Tool errors (strict mode only) ────────────────────────────────────
    /// The external converter failed and the configuration demands fatality.
    ///
    /// `exit_code` is `None` when the tool never ran (spawn failure) or was
    /// killed by a signal; `detail` then carries the launch diagnostic.
    #[error("PDF tool '{tool}' failed (exit code {exit_code:?})\n{detail}")]
    ToolFailed {
        tool: String,
        exit_code: Option<i32>,
        detail: String,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_display() {
        let e = Md2PdfError::FileNotFound {
            path: PathBuf::from("notes/report.md"),
        };
        let msg = e.to_string();
        assert!(msg.contains("notes/report.md"), "got: {msg}");
    }

    #[test]
    fn tool_failed_display() {
        let e = Md2PdfError::ToolFailed {
            tool: "wkhtmltopdf".into(),
            exit_code: Some(1),
            detail: "Exit with code 1 due to network error".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("wkhtmltopdf"));
        assert!(msg.contains("Some(1)"));
        assert!(msg.contains("network error"));
    }

    #[test]
    fn tool_failed_display_spawn_failure() {
        let e = Md2PdfError::ToolFailed {
            tool: "wkhtmltopdf".into(),
            exit_code: None,
            detail: "No such file or directory".into(),
        };
        assert!(e.to_string().contains("None"));
    }

    #[test]
    fn stylesheet_unreadable_carries_source() {
        use std::error::Error;
        let e = Md2PdfError::StylesheetUnreadable {
            path: PathBuf::from("missing.css"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(e.source().is_some());
        assert!(e.to_string().contains("missing.css"));
    }
}
