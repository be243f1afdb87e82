//! Converter stage: drive the external HTML-to-PDF tool.
//!
//! The tool is a black box invoked as `tool [args..] <in.html> <out.pdf>`.
//! Its exit status and output are captured into
//! [`ToolOutcome`](crate::output::ToolOutcome) but never interpreted here —
//! the orchestrator decides whether a failure matters.
//!
//! ## Staged-file lifetime
//!
//! The staged HTML file must disappear on *every* exit path: clean
//! completion, tool failure, strict-mode error return, panic. [`StagedHtml`]
//! owns the path and removes the file in `Drop`, so holding the guard across
//! the invocation is the whole cleanup story.

use crate::config::ConversionConfig;
use crate::error::Md2PdfError;
use crate::output::ToolOutcome;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

/// Compute the staging path for a source document: the configured working
/// directory (default: home directory) plus `<source-stem>.html`.
pub fn staging_path(source: &Path, config: &ConversionConfig) -> Result<PathBuf, Md2PdfError> {
    let dir = match config.work_dir {
        Some(ref dir) => dir.clone(),
        None => dirs::home_dir().ok_or(Md2PdfError::NoHomeDirectory)?,
    };

    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());

    Ok(dir.join(format!("{stem}.html")))
}

/// A staged HTML file that removes itself when dropped.
///
/// Create via [`stage`]; keep it alive across the tool invocation.
#[derive(Debug)]
pub struct StagedHtml {
    path: PathBuf,
}

impl StagedHtml {
    /// Path of the staged file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StagedHtml {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!("Removed staged HTML file ({})", self.path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(
                "Could not remove staged HTML file '{}': {e}",
                self.path.display()
            ),
        }
    }
}

/// Write the assembled document to `path` and return the cleanup guard.
pub fn stage(document: &str, path: PathBuf) -> Result<StagedHtml, Md2PdfError> {
    super::assemble::write_document(document, &path)?;
    Ok(StagedHtml { path })
}

/// Invoke the external converter on the staged HTML file.
///
/// Never fails from the caller's perspective: a spawn failure (missing
/// binary, permission problem) is folded into the outcome with
/// `exit_code: None` and the io error text in `stderr`.
pub fn invoke(html: &Path, pdf: &Path, config: &ConversionConfig) -> ToolOutcome {
    debug!(
        "Invoking '{}' {:?} {} {}",
        config.tool,
        config.tool_args,
        html.display(),
        pdf.display()
    );

    let result = Command::new(&config.tool)
        .args(&config.tool_args)
        .arg(html)
        .arg(pdf)
        .output();

    match result {
        Ok(output) => {
            let outcome = ToolOutcome {
                exit_code: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            };
            if outcome.success() {
                debug!("'{}' exited successfully", config.tool);
            } else {
                warn!(
                    "'{}' exited with {:?}: {}",
                    config.tool,
                    outcome.exit_code,
                    outcome.stderr.trim()
                );
            }
            outcome
        }
        Err(e) => {
            warn!("Failed to launch '{}': {e}", config.tool);
            ToolOutcome {
                exit_code: None,
                stdout: String::new(),
                stderr: e.to_string(),
            }
        }
    }
}
