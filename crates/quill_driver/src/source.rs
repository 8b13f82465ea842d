//! Source loading: bytes from disk, strict UTF-8 validation, and the
//! decoded code-point buffer the scanner consumes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to get a script from disk into scannable form.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("`{}` is not valid UTF-8 (first invalid byte at offset {offset})", .path.display())]
    Decode { path: PathBuf, offset: usize },
}

/// A loaded script, decoded to Unicode code points.
#[derive(Debug, Clone)]
pub struct SourceText {
    path: PathBuf,
    code_points: Vec<char>,
}

impl SourceText {
    /// Decode raw bytes. `path` only labels error messages.
    pub fn from_bytes(path: &Path, bytes: &[u8]) -> Result<SourceText, SourceError> {
        let text = simdutf8::compat::from_utf8(bytes).map_err(|err| SourceError::Decode {
            path: path.to_path_buf(),
            offset: err.valid_up_to(),
        })?;
        Ok(SourceText {
            path: path.to_path_buf(),
            code_points: text.chars().collect(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The scanner's input view.
    pub fn code_points(&self) -> &[char] {
        &self.code_points
    }
}

/// Read and decode the script at `path`.
pub fn load(path: &Path) -> Result<SourceText, SourceError> {
    let bytes = fs::read(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    SourceText::from_bytes(path, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_ascii() {
        let source = SourceText::from_bytes(Path::new("x.quill"), b"x := 1").unwrap();
        assert_eq!(source.code_points(), ['x', ' ', ':', '=', ' ', '1']);
    }

    #[test]
    fn decodes_multibyte_code_points() {
        let source = SourceText::from_bytes(Path::new("x.quill"), "café := 1".as_bytes()).unwrap();
        assert_eq!(source.code_points().len(), 9);
        assert_eq!(source.code_points()[3], 'é');
    }

    #[test]
    fn rejects_invalid_utf8_with_offset() {
        let err = SourceText::from_bytes(Path::new("x.quill"), b"ok\xffrest").unwrap_err();
        match err {
            SourceError::Decode { offset, .. } => assert_eq!(offset, 2),
            other => panic!("expected a decode error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_truncated_sequence() {
        // The first two bytes of a three-byte sequence.
        let err = SourceText::from_bytes(Path::new("x.quill"), b"\xe2\x82").unwrap_err();
        assert!(matches!(err, SourceError::Decode { offset: 0, .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load(Path::new("definitely/not/here.quill")).unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }
}
