//! # md2pdf
//!
//! Convert Markdown documents to PDF using a remote rendering API and an
//! external HTML-to-PDF converter.
//!
//! ## Why this crate?
//!
//! Rendering GitHub Flavored Markdown faithfully — tables, task lists,
//! autolinks, syntax-highlighted fences — is exactly what GitHub's own
//! rendering endpoint does best, and turning styled HTML into paginated PDF
//! is exactly what wkhtmltopdf does best. This crate glues the two together:
//! no Markdown parser to maintain, no PDF layout engine to debug, and the
//! output looks like the README does on github.com.
//!
//! ## Pipeline Overview
//!
//! ```text
//! Markdown
//!  │
//!  ├─ 1. Input     read the source file
//!  ├─ 2. Remote    POST {text, mode} to the rendering endpoint → HTML fragment
//!  ├─ 3. Assemble  doctype + stylesheet + title + <article class="markdown-body">
//!  └─ 4. Convert   stage HTML beside $HOME, run wkhtmltopdf, clean up
//! ```
//!
//! A failed remote call degrades rather than aborts: the run is logged, the
//! fragment is empty, and the PDF still comes out with the document chrome.
//! The staged HTML file is removed on every exit path.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use md2pdf::{convert, ConversionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConversionConfig::default();
//!     let report = convert("README.md", "README.pdf", &config)?;
//!     eprintln!(
//!         "rendered {} bytes in {}ms",
//!         report.stats.fragment_bytes, report.stats.total_duration_ms
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `md2pdf` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! md2pdf = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, RenderMode, Stylesheet};
pub use convert::convert;
pub use error::Md2PdfError;
pub use output::{ConversionReport, ConversionStats, RemoteOutcome, ToolOutcome};
