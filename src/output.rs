//! Result types returned by a conversion.
//!
//! The pipeline distinguishes three grades of failure, and only the fatal
//! grade uses `Err`. The other two are *data*:
//!
//! * [`RemoteOutcome`] — what happened at the rendering endpoint. A failed
//!   remote call degrades the document to empty content instead of aborting,
//!   so the outcome travels in the report for callers that care.
//! * [`ToolOutcome`] — what the external converter did. Its exit status is
//!   ignored by default (matching the converter-as-black-box contract) but
//!   captured here so strict callers can act on it.

use serde::{Deserialize, Serialize};

/// Everything a completed conversion has to say for itself.
///
/// Returned by [`crate::convert`] even when the remote call failed or the
/// tool exited non-zero (unless strict mode promoted the latter to an error).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionReport {
    /// Outcome of the remote rendering call.
    pub remote: RemoteOutcome,
    /// Outcome of the external tool invocation.
    pub tool: ToolOutcome,
    /// Size and timing statistics.
    pub stats: ConversionStats,
}

/// Size and timing statistics for one conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Byte length of the HTML fragment returned by the endpoint (0 on failure).
    pub fragment_bytes: usize,
    /// Byte length of the assembled HTML document.
    pub document_bytes: usize,
    /// Wall-clock time spent in the remote rendering call.
    pub remote_duration_ms: u64,
    /// Wall-clock time spent waiting on the external tool.
    pub tool_duration_ms: u64,
    /// Total pipeline wall-clock time.
    pub total_duration_ms: u64,
}

/// Outcome of the remote rendering call.
///
/// Only `Rendered` produces a non-empty fragment; the other three all
/// degrade to an empty fragment and an assembled document containing just
/// the fixed chrome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RemoteOutcome {
    /// The endpoint returned 2xx and the body was decoded as the fragment.
    Rendered,
    /// The endpoint returned 401 — the configured credential (or its absence)
    /// was rejected.
    AuthRejected,
    /// The endpoint returned some other non-success status.
    UnfriendlyResponse { status: u16 },
    /// The request never completed: connection failure, timeout at the
    /// transport level, or an undecodable response body.
    TransportFailed { detail: String },
}

impl RemoteOutcome {
    /// True when the fragment actually came from the endpoint.
    pub fn is_rendered(&self) -> bool {
        matches!(self, RemoteOutcome::Rendered)
    }
}

/// Captured result of the external tool invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutcome {
    /// The tool's exit code. `None` means the process never ran (spawn
    /// failure — typically a missing binary) or was killed by a signal;
    /// `stderr` carries the diagnostic in the spawn-failure case.
    pub exit_code: Option<i32>,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

impl ToolOutcome {
    /// True when the tool ran and exited zero.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_outcome_success() {
        let ok = ToolOutcome {
            exit_code: Some(0),
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(ok.success());

        let failed = ToolOutcome {
            exit_code: Some(1),
            stdout: String::new(),
            stderr: "boom".into(),
        };
        assert!(!failed.success());

        let never_ran = ToolOutcome {
            exit_code: None,
            stdout: String::new(),
            stderr: "No such file or directory".into(),
        };
        assert!(!never_ran.success());
    }

    #[test]
    fn remote_outcome_predicates() {
        assert!(RemoteOutcome::Rendered.is_rendered());
        assert!(!RemoteOutcome::AuthRejected.is_rendered());
        assert!(!RemoteOutcome::UnfriendlyResponse { status: 503 }.is_rendered());
    }

    #[test]
    fn report_serialises_to_json() {
        let report = ConversionReport {
            remote: RemoteOutcome::UnfriendlyResponse { status: 500 },
            tool: ToolOutcome {
                exit_code: Some(0),
                stdout: String::new(),
                stderr: String::new(),
            },
            stats: ConversionStats::default(),
        };

        let json = serde_json::to_string(&report).expect("report must serialise");
        assert!(json.contains("unfriendly_response"));
        assert!(json.contains("\"status\":500"));

        let back: ConversionReport = serde_json::from_str(&json).expect("round-trip");
        assert_eq!(back.remote, report.remote);
    }
}
