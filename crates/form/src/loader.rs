//! File loading for the form
//!
//! Turns a selected file into document text. Everything here runs before any
//! request is made, so format problems never reach the server.

use docsum_common::{DocsumError, Result};
use std::path::Path;
use tracing::{debug, warn};

const TEXT_EXTENSIONS: &[&str] = &["txt", "md"];
const BEST_EFFORT_EXTENSION: &str = "pdf";

const MISSING_EXTENSION_MESSAGE: &str = "Unsupported file type. Use .txt or .md.";
const UNSUPPORTED_EXTENSION_MESSAGE: &str = "Only .txt, .md, or simple .pdf files are supported.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileKind {
    Text,
    BestEffortBinary,
}

/// Read a file from disk and decode it as document text
pub async fn read_file_content(path: &Path) -> Result<String> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    // Reject before touching the disk
    classify(&file_name)?;

    let bytes = tokio::fs::read(path).await?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());

    decode_file(&file_name, &bytes)
}

/// Decode file bytes according to the file name's extension
pub fn decode_file(file_name: &str, bytes: &[u8]) -> Result<String> {
    match classify(file_name)? {
        FileKind::Text => Ok(decode_utf8(bytes)),
        FileKind::BestEffortBinary => {
            warn!(
                "Decoding {} as plain text; binary documents may come out garbled",
                file_name
            );
            Ok(decode_utf8(bytes))
        }
    }
}

fn classify(file_name: &str) -> Result<FileKind> {
    let ext = extension(file_name)
        .ok_or_else(|| DocsumError::unsupported_format(MISSING_EXTENSION_MESSAGE))?;

    if TEXT_EXTENSIONS.contains(&ext.as_str()) {
        Ok(FileKind::Text)
    } else if ext == BEST_EFFORT_EXTENSION {
        Ok(FileKind::BestEffortBinary)
    } else {
        Err(DocsumError::unsupported_format(UNSUPPORTED_EXTENSION_MESSAGE))
    }
}

/// Lowercased text after the last dot, if any
fn extension(file_name: &str) -> Option<String> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
        .map(str::to_lowercase)
}

/// Lossy UTF-8 decode that drops a leading byte-order mark
fn decode_utf8(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_files_decode_verbatim() {
        let text = "# Notes\n\nLine with ünïcödé\r\n";
        assert_eq!(decode_file("notes.md", text.as_bytes()).unwrap(), text);
        assert_eq!(decode_file("notes.txt", text.as_bytes()).unwrap(), text);
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(decode_file("REPORT.TXT", b"hi").unwrap(), "hi");
        assert_eq!(decode_file("Readme.Md", b"hi").unwrap(), "hi");
        assert_eq!(decode_file("archive.tar.md", b"hi").unwrap(), "hi");
    }

    #[test]
    fn test_byte_order_mark_is_dropped() {
        assert_eq!(decode_file("bom.txt", b"\xEF\xBB\xBFhello").unwrap(), "hello");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let decoded = decode_file("broken.txt", b"ok \xFF done").unwrap();
        assert_eq!(decoded, "ok \u{FFFD} done");
    }

    #[test]
    fn test_pdf_is_best_effort_text() {
        let decoded = decode_file("scan.PDF", b"%PDF-1.4\n\x00\x9Fbody").unwrap();
        assert!(decoded.starts_with("%PDF-1.4\n"));
        assert!(decoded.contains('\u{FFFD}'));
    }

    #[test]
    fn test_missing_extension() {
        for name in ["", "notes.", "dir/file."] {
            let err = decode_file(name, b"x").unwrap_err();
            assert_eq!(err.to_string(), "Unsupported file type. Use .txt or .md.");
        }
    }

    #[test]
    fn test_unsupported_extension_names_accepted_ones() {
        for name in ["slides.pptx", "photo.png", "README"] {
            let err = decode_file(name, b"x").unwrap_err();
            assert!(matches!(err, DocsumError::UnsupportedFormat(_)), "{}", name);
        }
        let err = decode_file("slides.docx", b"x").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Only .txt, .md, or simple .pdf files are supported."
        );
    }

    #[tokio::test]
    async fn test_read_file_content_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.md");
        std::fs::write(&path, "Hello world. ").unwrap();

        assert_eq!(read_file_content(&path).await.unwrap(), "Hello world. ");
    }

    #[tokio::test]
    async fn test_unsupported_file_is_not_read() {
        // Does not exist: the extension check must fail first
        let err = read_file_content(Path::new("/nonexistent/file.exe"))
            .await
            .unwrap_err();
        assert!(matches!(err, DocsumError::UnsupportedFormat(_)));

        let err = read_file_content(Path::new("/nonexistent/file.txt"))
            .await
            .unwrap_err();
        assert!(matches!(err, DocsumError::Io(_)));
    }
}
