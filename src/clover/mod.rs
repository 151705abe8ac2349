pub mod metrics;
pub mod tree;

use crate::error::{CoverageError, Result};
use std::path::Path;
use tree::{XmlElement, XmlParser};

const BOM: char = '\u{feff}';

pub fn load(path: &Path, parser: &dyn XmlParser) -> Result<XmlElement> {
    let text = std::fs::read_to_string(path).map_err(|source| CoverageError::Io {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read coverage report");

    parser
        .parse(strip_bom(&text))
        .map_err(|message| CoverageError::Parse {
            path: path.display().to_string(),
            message,
        })
}

fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BOM).unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use tree::RoxmlParser;

    #[test]
    fn strip_bom_removes_single_leading_mark() {
        assert_eq!(strip_bom("\u{feff}<a/>"), "<a/>");
        assert_eq!(strip_bom("\u{feff}\u{feff}<a/>"), "\u{feff}<a/>");
        assert_eq!(strip_bom("<a/>"), "<a/>");
    }

    #[test]
    fn load_parses_file_with_bom() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("clover.xml");
        fs::write(&path, "\u{feff}<?xml version=\"1.0\"?><coverage><project/></coverage>")
            .expect("report should write");

        let tree = load(&path, &RoxmlParser).expect("report should load");
        assert_eq!(tree.name, "coverage");
    }

    #[test]
    fn load_missing_file_is_io_error_with_path() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("absent.xml");

        let err = load(&path, &RoxmlParser).expect_err("missing file should fail");
        assert!(matches!(err, CoverageError::Io { .. }));
        assert!(err.to_string().contains("absent.xml"));
    }

    #[test]
    fn load_invalid_utf8_is_io_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("latin1.xml");
        fs::write(&path, b"<coverage>\xff</coverage>").expect("report should write");

        let err = load(&path, &RoxmlParser).expect_err("invalid utf-8 should fail");
        match err {
            CoverageError::Io { path, source } => {
                assert!(path.ends_with("latin1.xml"));
                assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
            }
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn load_malformed_xml_is_parse_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("broken.xml");
        fs::write(&path, "<coverage><project></coverage>").expect("report should write");

        let err = load(&path, &RoxmlParser).expect_err("malformed xml should fail");
        match err {
            CoverageError::Parse { path, message } => {
                assert!(path.ends_with("broken.xml"));
                assert!(!message.is_empty());
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
