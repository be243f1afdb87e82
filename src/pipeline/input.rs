//! Input stage: read the source Markdown file.
//!
//! The source is read once, in full, as UTF-8 text. Anything that stops that
//! is fatal — there is no document to convert without it — so the io error
//! kinds are mapped onto the typed variants callers can match on.

use crate::error::Md2PdfError;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read the source Markdown file to a string.
pub fn read_source(path: &Path) -> Result<String, Md2PdfError> {
    match fs::read_to_string(path) {
        Ok(text) => {
            debug!("Read {} bytes from {}", text.len(), path.display());
            Ok(text)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(Md2PdfError::FileNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            Err(Md2PdfError::PermissionDenied {
                path: path.to_path_buf(),
            })
        }
        Err(e) => Err(Md2PdfError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.md");
        fs::write(&path, "# Hello\n").unwrap();

        let text = read_source(&path).expect("read must succeed");
        assert_eq!(text, "# Hello\n");
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let err = read_source(Path::new("/definitely/not/here.md")).unwrap_err();
        assert!(matches!(err, Md2PdfError::FileNotFound { .. }), "got: {err}");
    }

    #[test]
    fn invalid_utf8_is_read_failed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.md");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = read_source(&path).unwrap_err();
        assert!(matches!(err, Md2PdfError::ReadFailed { .. }), "got: {err}");
    }
}
