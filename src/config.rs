//! Configuration types for Markdown-to-PDF conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. Keeping every knob in one struct makes
//! it trivial to share configs, log them, and diff two runs to understand why
//! their outputs differ.

use crate::error::Md2PdfError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Default rendering endpoint: GitHub's Markdown API.
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/markdown";

/// Default external HTML-to-PDF converter.
pub const DEFAULT_TOOL: &str = "wkhtmltopdf";

/// Configuration for a Markdown-to-PDF conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use md2pdf::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .tool("weasyprint")
///     .fail_on_tool_error(true)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct ConversionConfig {
    /// Rendering endpoint URL. Default: [`DEFAULT_ENDPOINT`].
    pub endpoint: String,

    /// Rendering mode sent in the request payload. Default: [`RenderMode::Gfm`].
    pub mode: RenderMode,

    /// Optional bearer credential attached to the rendering request.
    ///
    /// The public endpoint works unauthenticated at a low rate limit; a token
    /// raises the limit and makes a 401 from the endpoint actionable. When
    /// `None`, no credential header is sent at all.
    pub token: Option<String>,

    /// Where the inlined stylesheet comes from. Default: [`Stylesheet::Bundled`].
    pub stylesheet: Stylesheet,

    /// External HTML-to-PDF converter command. Default: [`DEFAULT_TOOL`].
    ///
    /// Resolved through `PATH` like any command; availability is not checked
    /// up front — a missing binary surfaces as a spawn failure in
    /// [`crate::output::ToolOutcome`].
    pub tool: String,

    /// Extra arguments passed to the tool before the input/output paths.
    ///
    /// wkhtmltopdf and friends take their options before the positional
    /// paths, so these are inserted first: `tool [tool_args..] in.html out.pdf`.
    pub tool_args: Vec<String>,

    /// Directory for the staged HTML file. Default: the user's home directory.
    pub work_dir: Option<PathBuf>,

    /// Treat a non-zero tool exit (or spawn failure) as fatal. Default: false.
    ///
    /// The historical behaviour is to report completion regardless of the
    /// tool's exit status; flipping this makes [`crate::convert`] return
    /// [`Md2PdfError::ToolFailed`] instead.
    pub fail_on_tool_error: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            mode: RenderMode::default(),
            token: None,
            stylesheet: Stylesheet::default(),
            tool: DEFAULT_TOOL.to_string(),
            tool_args: Vec::new(),
            work_dir: None,
            fail_on_tool_error: false,
        }
    }
}

impl fmt::Debug for ConversionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionConfig")
            .field("endpoint", &self.endpoint)
            .field("mode", &self.mode)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("stylesheet", &self.stylesheet)
            .field("tool", &self.tool)
            .field("tool_args", &self.tool_args)
            .field("work_dir", &self.work_dir)
            .field("fail_on_tool_error", &self.fail_on_tool_error)
            .finish()
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.config.endpoint = url.into();
        self
    }

    pub fn mode(mut self, mode: RenderMode) -> Self {
        self.config.mode = mode;
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.config.token = Some(token.into());
        self
    }

    pub fn stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.config.stylesheet = stylesheet;
        self
    }

    pub fn tool(mut self, tool: impl Into<String>) -> Self {
        self.config.tool = tool.into();
        self
    }

    pub fn tool_arg(mut self, arg: impl Into<String>) -> Self {
        self.config.tool_args.push(arg.into());
        self
    }

    pub fn tool_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.tool_args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn work_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.work_dir = Some(dir.into());
        self
    }

    pub fn fail_on_tool_error(mut self, v: bool) -> Self {
        self.config.fail_on_tool_error = v;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Md2PdfError> {
        let c = &self.config;
        if c.endpoint.trim().is_empty() {
            return Err(Md2PdfError::InvalidConfig(
                "Rendering endpoint must not be empty".into(),
            ));
        }
        if !c.endpoint.starts_with("http://") && !c.endpoint.starts_with("https://") {
            return Err(Md2PdfError::InvalidConfig(format!(
                "Rendering endpoint must be an http(s) URL, got '{}'",
                c.endpoint
            )));
        }
        if c.tool.trim().is_empty() {
            return Err(Md2PdfError::InvalidConfig(
                "PDF tool command must not be empty".into(),
            ));
        }
        Ok(self.config)
    }
}

// ── Enums ────────────────────────────────────────────────────────────────

/// Rendering mode understood by the endpoint.
///
/// The upstream API renders either plain Markdown or GitHub Flavored
/// Markdown; GFM is the default because tables, task lists, and autolinks
/// are what people reach for this tool for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// GitHub Flavored Markdown. (default)
    #[default]
    Gfm,
    /// Plain Markdown.
    Markdown,
}

impl RenderMode {
    /// The `mode` value as the endpoint expects it in the request payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Gfm => "gfm",
            RenderMode::Markdown => "markdown",
        }
    }
}

/// Where the inlined stylesheet comes from.
///
/// The bundled default is compiled into the binary, so the tool is not
/// coupled to any on-disk directory layout. A path variant is read fresh on
/// every conversion; an unreadable path is fatal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub enum Stylesheet {
    /// The GitHub-flavoured stylesheet shipped with the crate. (default)
    #[default]
    Bundled,
    /// A caller-supplied CSS file.
    File(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ConversionConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.mode, RenderMode::Gfm);
        assert_eq!(config.tool, DEFAULT_TOOL);
        assert!(config.token.is_none());
        assert!(!config.fail_on_tool_error);
    }

    #[test]
    fn builder_overrides() {
        let config = ConversionConfig::builder()
            .endpoint("https://render.example/markdown")
            .mode(RenderMode::Markdown)
            .token("ghp_abc")
            .tool("weasyprint")
            .tool_arg("--quiet")
            .work_dir("/tmp/md2pdf")
            .fail_on_tool_error(true)
            .build()
            .expect("valid config");

        assert_eq!(config.endpoint, "https://render.example/markdown");
        assert_eq!(config.mode.as_str(), "markdown");
        assert_eq!(config.token.as_deref(), Some("ghp_abc"));
        assert_eq!(config.tool, "weasyprint");
        assert_eq!(config.tool_args, vec!["--quiet"]);
        assert_eq!(config.work_dir.as_deref(), Some(std::path::Path::new("/tmp/md2pdf")));
        assert!(config.fail_on_tool_error);
    }

    #[test]
    fn empty_endpoint_rejected() {
        let err = ConversionConfig::builder().endpoint("  ").build();
        assert!(matches!(err, Err(Md2PdfError::InvalidConfig(_))));
    }

    #[test]
    fn non_http_endpoint_rejected() {
        let err = ConversionConfig::builder().endpoint("ftp://render/markdown").build();
        assert!(matches!(err, Err(Md2PdfError::InvalidConfig(_))));
    }

    #[test]
    fn empty_tool_rejected() {
        let err = ConversionConfig::builder().tool("").build();
        assert!(matches!(err, Err(Md2PdfError::InvalidConfig(_))));
    }

    #[test]
    fn debug_redacts_token() {
        let config = ConversionConfig::builder()
            .token("ghp_secret")
            .build()
            .unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("ghp_secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
