//! Conversion entry point: the whole pipeline, in order, once.
//!
//! The stages run strictly in sequence with no rollback. A remote rendering
//! failure does not abort the run — the assembled document then contains only
//! the fixed chrome, and the PDF still gets produced. Only the conditions in
//! [`Md2PdfError`] stop the pipeline.

use crate::config::ConversionConfig;
use crate::error::Md2PdfError;
use crate::output::{ConversionReport, ConversionStats};
use crate::pipeline::{assemble, input, pdftool, remote};
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

/// Convert a Markdown file to a PDF.
///
/// Reads `source`, renders it to HTML via the configured endpoint, stages a
/// complete HTML document, and runs the external converter to produce
/// `dest`. The staged HTML file is removed on every exit path.
///
/// # Errors
/// Returns `Err(Md2PdfError)` only for fatal conditions: unreadable source,
/// unreadable stylesheet, staging write failure, no resolvable staging
/// directory — and, with [`ConversionConfig::fail_on_tool_error`] set, a
/// failed tool invocation. A failed remote call is NOT an error; check
/// [`ConversionReport::remote`].
pub fn convert(
    source: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionReport, Md2PdfError> {
    let total_start = Instant::now();
    let source = source.as_ref();
    let dest = dest.as_ref();
    info!("Converting {} to {}", source.display(), dest.display());

    // ── Stage 1: read the source ─────────────────────────────────────────
    let markdown = input::read_source(source)?;

    // ── Stage 2: remote rendering (degrades, never fails) ────────────────
    let remote_start = Instant::now();
    let fragment = remote::render_markdown(&markdown, config);
    let remote_duration_ms = remote_start.elapsed().as_millis() as u64;

    // ── Stage 3: assemble and stage the HTML document ────────────────────
    let html_path = pdftool::staging_path(source, config)?;
    let document = assemble::build_document(&fragment.html, &html_path, config)?;
    let document_bytes = document.len();
    let staged = pdftool::stage(&document, html_path)?;

    // ── Stage 4: external converter ──────────────────────────────────────
    let tool_start = Instant::now();
    let tool = pdftool::invoke(staged.path(), dest, config);
    let tool_duration_ms = tool_start.elapsed().as_millis() as u64;

    // The staged file goes away before anything else happens — including the
    // strict-mode error return below.
    drop(staged);

    if !tool.success() {
        if config.fail_on_tool_error {
            return Err(Md2PdfError::ToolFailed {
                tool: config.tool.clone(),
                exit_code: tool.exit_code,
                detail: if tool.stderr.trim().is_empty() {
                    tool.stdout.trim().to_string()
                } else {
                    tool.stderr.trim().to_string()
                },
            });
        }
        warn!(
            "'{}' did not exit cleanly ({:?}); the PDF may be missing or incomplete",
            config.tool, tool.exit_code
        );
    }

    // Completion of the pipeline, not a guarantee the PDF is well-formed.
    info!("{} to {} completed", source.display(), dest.display());

    Ok(ConversionReport {
        remote: fragment.outcome,
        tool,
        stats: ConversionStats {
            fragment_bytes: fragment.html.len(),
            document_bytes,
            remote_duration_ms,
            tool_duration_ms,
            total_duration_ms: total_start.elapsed().as_millis() as u64,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_source_fails_before_any_network_io() {
        // An endpoint that cannot exist: if stage 2 ran, the test would block
        // on a connection attempt instead of returning instantly.
        let config = ConversionConfig::builder()
            .endpoint("http://192.0.2.1/markdown")
            .build()
            .unwrap();

        let err = convert("/no/such/source.md", "/tmp/out.pdf", &config).unwrap_err();
        assert!(matches!(err, Md2PdfError::FileNotFound { .. }), "got: {err}");
    }

    // Full-pipeline behaviour (mock endpoint, stub tools, cleanup, strict
    // mode) is covered in tests/e2e.rs.
}
