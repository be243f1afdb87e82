//! CLI binary for md2pdf.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ConversionConfig` and prints the result.

use anyhow::{Context, Result};
use clap::Parser;
use md2pdf::{convert, ConversionConfig, RemoteOutcome, RenderMode, Stylesheet};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Basic conversion
  md2pdf README.md README.pdf

  # With a credential (higher endpoint rate limit, meaningful 401s)
  GITHUB_TOKEN=ghp_... md2pdf notes.md notes.pdf

  # Custom stylesheet and strict tool handling
  md2pdf --stylesheet print.css --strict report.md report.pdf

  # A different converter, with its own options
  md2pdf --tool weasyprint slides.md slides.pdf

  # Pass options through to wkhtmltopdf
  md2pdf --tool-arg --no-images --tool-arg --grayscale doc.md doc.pdf

  # Machine-readable conversion report
  md2pdf --json doc.md doc.pdf > report.json

ENVIRONMENT VARIABLES:
  GITHUB_TOKEN       Bearer credential for the rendering endpoint
  MD2PDF_ENDPOINT    Override the rendering endpoint URL
  MD2PDF_STYLESHEET  Path to a CSS file replacing the bundled stylesheet
  MD2PDF_TOOL        HTML-to-PDF converter command (default: wkhtmltopdf)
  MD2PDF_WORK_DIR    Directory for the staged HTML file (default: $HOME)

SETUP:
  The converter must be on PATH. wkhtmltopdf: https://wkhtmltopdf.org
"#;

/// Convert a Markdown file to PDF via a remote rendering API and wkhtmltopdf.
#[derive(Parser, Debug)]
#[command(
    name = "md2pdf",
    version,
    about = "Convert a Markdown file to PDF via a remote rendering API and wkhtmltopdf",
    long_about = "Convert a Markdown document to PDF. The Markdown is rendered to HTML by a \
remote endpoint (GitHub's Markdown API by default), wrapped in a styled HTML document, and \
handed to an external HTML-to-PDF converter (wkhtmltopdf by default).",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Source Markdown file.
    source: PathBuf,

    /// Destination PDF file.
    dest: PathBuf,

    /// Rendering endpoint URL.
    #[arg(long, env = "MD2PDF_ENDPOINT", default_value = md2pdf::config::DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Rendering mode: gfm or markdown.
    #[arg(long, env = "MD2PDF_MODE", value_enum, default_value = "gfm")]
    mode: ModeArg,

    /// Bearer credential for the rendering endpoint.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// CSS file to inline instead of the bundled stylesheet.
    #[arg(long, env = "MD2PDF_STYLESHEET")]
    stylesheet: Option<PathBuf>,

    /// HTML-to-PDF converter command.
    #[arg(long, env = "MD2PDF_TOOL", default_value = md2pdf::config::DEFAULT_TOOL)]
    tool: String,

    /// Extra argument passed to the converter before the file paths (repeatable).
    #[arg(long = "tool-arg", value_name = "ARG")]
    tool_args: Vec<String>,

    /// Directory for the staged HTML file.
    #[arg(long, env = "MD2PDF_WORK_DIR")]
    work_dir: Option<PathBuf>,

    /// Fail (non-zero exit) when the converter does not exit cleanly.
    #[arg(long, env = "MD2PDF_STRICT")]
    strict: bool,

    /// Print the conversion report as JSON instead of the summary line.
    #[arg(long, env = "MD2PDF_JSON")]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "MD2PDF_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "MD2PDF_QUIET")]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum ModeArg {
    Gfm,
    Markdown,
}

impl From<ModeArg> for RenderMode {
    fn from(v: ModeArg) -> Self {
        match v {
            ModeArg::Gfm => RenderMode::Gfm,
            ModeArg::Markdown => RenderMode::Markdown,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let mut builder = ConversionConfig::builder()
        .endpoint(cli.endpoint)
        .mode(cli.mode.into())
        .tool(cli.tool)
        .tool_args(cli.tool_args)
        .fail_on_tool_error(cli.strict);

    if let Some(token) = cli.token {
        builder = builder.token(token);
    }
    if let Some(css) = cli.stylesheet {
        builder = builder.stylesheet(Stylesheet::File(css));
    }
    if let Some(dir) = cli.work_dir {
        builder = builder.work_dir(dir);
    }

    let config = builder.build().context("Invalid configuration")?;

    // ── Run conversion ───────────────────────────────────────────────────
    let report = convert(&cli.source, &cli.dest, &config).context("Conversion failed")?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialise report")?;
        println!("{json}");
        return Ok(());
    }

    if !cli.quiet {
        let tick = if report.remote.is_rendered() && report.tool.success() {
            green("✔")
        } else if report.tool.success() {
            cyan("⚠")
        } else {
            red("✘")
        };
        eprintln!(
            "{tick} {} → {}  {}",
            cli.source.display(),
            bold(&cli.dest.display().to_string()),
            dim(&format!("{}ms", report.stats.total_duration_ms)),
        );
        eprintln!(
            "   remote: {}  {}  tool: {}",
            describe_remote(&report.remote),
            dim(&format!("({} bytes)", report.stats.fragment_bytes)),
            match report.tool.exit_code {
                Some(code) => format!("exit {code}"),
                None => red("did not run"),
            },
        );
    }

    Ok(())
}

fn describe_remote(outcome: &RemoteOutcome) -> String {
    match outcome {
        RemoteOutcome::Rendered => green("rendered"),
        RemoteOutcome::AuthRejected => red("credentials rejected"),
        RemoteOutcome::UnfriendlyResponse { status } => red(&format!("HTTP {status}")),
        RemoteOutcome::TransportFailed { .. } => red("unreachable"),
    }
}
