//! Assembly stage: wrap the rendered fragment in a complete HTML document.
//!
//! The chrome is fixed: HTML5 doctype, UTF-8 charset, one inlined `<style>`
//! block, a title derived from the staged filename, and the fragment inside
//! `<article class="markdown-body">` — the class the stylesheet targets.
//! Unlike the remote stage, everything here is fatal on failure: a document
//! without its stylesheet or one that cannot be written is not a degraded
//! result, it is no result.

use crate::config::{ConversionConfig, Stylesheet};
use crate::error::Md2PdfError;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// The stylesheet compiled into the crate, used by [`Stylesheet::Bundled`].
pub const DEFAULT_STYLESHEET: &str = include_str!("../../assets/github.css");

/// Build the complete HTML document for the given fragment.
///
/// `output_path` is the path the document will be staged at; its base
/// filename (extension stripped) becomes the `<title>`.
pub fn build_document(
    fragment: &str,
    output_path: &Path,
    config: &ConversionConfig,
) -> Result<String, Md2PdfError> {
    let css = load_stylesheet(&config.stylesheet)?;
    let title = escape_text(&document_title(output_path));

    let mut html = String::with_capacity(css.len() + fragment.len() + 256);
    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html>\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<style>\n");
    html.push_str(&css);
    html.push_str("\n</style>\n");
    html.push_str("<title>");
    html.push_str(&title);
    html.push_str("</title>\n");
    html.push_str("</head>\n<body>\n");
    html.push_str("<article class=\"markdown-body\">");
    html.push_str(fragment);
    html.push_str("</article>\n");
    html.push_str("</body>\n</html>\n");

    debug!(
        "Assembled document: {} bytes ({} bytes fragment)",
        html.len(),
        fragment.len()
    );
    Ok(html)
}

/// Write the assembled document to `path`, overwriting any existing file.
pub fn write_document(document: &str, path: &Path) -> Result<(), Md2PdfError> {
    fs::write(path, document).map_err(|e| Md2PdfError::StagingWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!("Created staged HTML file ({})", path.display());
    Ok(())
}

/// Resolve the stylesheet text from its configured source.
///
/// The bundled variant costs nothing; a file variant is read fresh on every
/// call so edits between runs take effect without rebuilding anything.
fn load_stylesheet(source: &Stylesheet) -> Result<Cow<'static, str>, Md2PdfError> {
    match source {
        Stylesheet::Bundled => Ok(Cow::Borrowed(DEFAULT_STYLESHEET)),
        Stylesheet::File(path) => fs::read_to_string(path).map(Cow::Owned).map_err(|e| {
            Md2PdfError::StylesheetUnreadable {
                path: path.clone(),
                source: e,
            }
        }),
    }
}

/// Derive the document title from a path: base filename, extension stripped.
pub fn document_title(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string())
}

/// Escape text for embedding in HTML content.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn title_strips_extension_and_directory() {
        assert_eq!(document_title(Path::new("/home/user/My Report.html")), "My Report");
        assert_eq!(document_title(Path::new("notes.html")), "notes");
        assert_eq!(document_title(Path::new("archive.tar.html")), "archive.tar");
    }

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(escape_text("My Report"), "My Report");
        assert_eq!(escape_text("a < b & c > d"), "a &lt; b &amp; c &gt; d");
        assert_eq!(escape_text(r#""it's""#), "&quot;it&#39;s&quot;");
    }

    #[test]
    fn document_contains_fixed_chrome() {
        let config = ConversionConfig::default();
        let html = build_document("<p>hi</p>", Path::new("/home/u/readme.html"), &config)
            .expect("assembly must succeed");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<meta charset=\"utf-8\">"));
        assert!(html.contains(DEFAULT_STYLESHEET));
        assert!(html.contains("<title>readme</title>"));
        assert!(html.contains("<article class=\"markdown-body\"><p>hi</p></article>"));
    }

    #[test]
    fn title_is_escaped_in_document() {
        let config = ConversionConfig::default();
        let html = build_document("", Path::new("/home/u/a<b.html"), &config).unwrap();
        assert!(html.contains("<title>a&lt;b</title>"));
        assert!(!html.contains("<title>a<b</title>"));
    }

    #[test]
    fn empty_fragment_still_produces_full_chrome() {
        let config = ConversionConfig::default();
        let html = build_document("", Path::new("report.html"), &config).unwrap();
        assert!(html.contains("<article class=\"markdown-body\"></article>"));
        assert!(html.contains("<title>report</title>"));
    }

    #[test]
    fn file_stylesheet_is_inlined() {
        let dir = tempfile::tempdir().unwrap();
        let css_path = dir.path().join("custom.css");
        fs::write(&css_path, "body { color: teal; }").unwrap();

        let config = ConversionConfig::builder()
            .stylesheet(Stylesheet::File(css_path))
            .build()
            .unwrap();

        let html = build_document("<p>x</p>", Path::new("doc.html"), &config).unwrap();
        assert!(html.contains("body { color: teal; }"));
        assert!(!html.contains(DEFAULT_STYLESHEET));
    }

    #[test]
    fn missing_stylesheet_is_fatal() {
        let config = ConversionConfig::builder()
            .stylesheet(Stylesheet::File(PathBuf::from("/no/such/style.css")))
            .build()
            .unwrap();

        let err = build_document("", Path::new("doc.html"), &config).unwrap_err();
        assert!(matches!(err, Md2PdfError::StylesheetUnreadable { .. }), "got: {err}");
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.html");
        fs::write(&path, "old contents").unwrap();

        write_document("new contents", &path).expect("write must succeed");
        assert_eq!(fs::read_to_string(&path).unwrap(), "new contents");
    }
}
