//! Remote rendering stage: Markdown text in, HTML fragment out.
//!
//! One synchronous POST, no retries, no exposed timeout. This stage is the
//! pipeline's single external-dependency boundary and the only one that does
//! not abort on failure: whatever goes wrong — rejected credentials, a 5xx,
//! an unreachable network — is logged and the conversion continues with an
//! empty fragment, producing a PDF with just the document chrome rather than
//! no PDF at all.

use crate::config::ConversionConfig;
use crate::output::RemoteOutcome;
use serde::Serialize;
use std::error::Error as _;
use tracing::{debug, info, warn};

/// User agent sent with every rendering request. The upstream API rejects
/// requests that carry no agent at all.
const USER_AGENT: &str = concat!("md2pdf/", env!("CARGO_PKG_VERSION"));

/// Request payload understood by the rendering endpoint.
#[derive(Serialize)]
struct RenderRequest<'a> {
    text: &'a str,
    mode: &'a str,
}

/// The rendered fragment together with how it came to be.
///
/// `html` is the empty string for every outcome except
/// [`RemoteOutcome::Rendered`].
#[derive(Debug)]
pub struct RenderedFragment {
    pub html: String,
    pub outcome: RemoteOutcome,
}

impl RenderedFragment {
    fn failed(outcome: RemoteOutcome) -> Self {
        Self {
            html: String::new(),
            outcome,
        }
    }
}

/// Render Markdown text to an HTML fragment via the configured endpoint.
///
/// Infallible by design: remote failures degrade to an empty fragment and a
/// non-`Rendered` outcome, never to an `Err`.
pub fn render_markdown(markdown: &str, config: &ConversionConfig) -> RenderedFragment {
    info!("Rendering markdown via {}", config.endpoint);

    let payload = RenderRequest {
        text: markdown,
        mode: config.mode.as_str(),
    };

    match post_markdown(&payload, config) {
        Ok(response) => fragment_from_response(response),
        Err(e) => {
            warn!("Cannot use the rendering endpoint: {e}");
            // Surface the whole cause chain; reqwest errors bury the
            // interesting part (DNS failure, refused connection) one or two
            // levels down.
            let mut cause = e.source();
            while let Some(c) = cause {
                debug!("  caused by: {c}");
                cause = c.source();
            }
            RenderedFragment::failed(RemoteOutcome::TransportFailed {
                detail: e.to_string(),
            })
        }
    }
}

fn post_markdown(
    payload: &RenderRequest<'_>,
    config: &ConversionConfig,
) -> Result<reqwest::blocking::Response, reqwest::Error> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .build()?;

    let mut request = client.post(&config.endpoint).json(payload);
    if let Some(ref token) = config.token {
        request = request.bearer_auth(token);
    }
    request.send()
}

fn fragment_from_response(response: reqwest::blocking::Response) -> RenderedFragment {
    let status = response.status();

    if status.is_success() {
        return match response.text() {
            Ok(html) => {
                info!("Rendered markdown via the endpoint ({} bytes)", html.len());
                RenderedFragment {
                    html,
                    outcome: RemoteOutcome::Rendered,
                }
            }
            Err(e) => {
                warn!("Rendering endpoint body could not be decoded: {e}");
                RenderedFragment::failed(RemoteOutcome::TransportFailed {
                    detail: e.to_string(),
                })
            }
        };
    }

    if status == reqwest::StatusCode::UNAUTHORIZED {
        warn!("Rendering endpoint rejected the request (HTTP 401). Check your API token.");
        return RenderedFragment::failed(RemoteOutcome::AuthRejected);
    }

    warn!("Rendering endpoint responded in an unfriendly way (HTTP {status})");
    RenderedFragment::failed(RemoteOutcome::UnfriendlyResponse {
        status: status.as_u16(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_shape() {
        let payload = RenderRequest {
            text: "# Title",
            mode: "gfm",
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["text"], "# Title");
        assert_eq!(json["mode"], "gfm");
        assert_eq!(json.as_object().unwrap().len(), 2);
    }

    #[test]
    fn failed_fragment_is_empty() {
        let fragment = RenderedFragment::failed(RemoteOutcome::AuthRejected);
        assert!(fragment.html.is_empty());
        assert_eq!(fragment.outcome, RemoteOutcome::AuthRejected);
    }

    // Network behaviour (2xx / 401 / 5xx / refused connection) is covered by
    // the loopback-endpoint tests in tests/e2e.rs.
}
