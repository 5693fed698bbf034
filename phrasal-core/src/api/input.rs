//! Input abstraction for the processing pipeline

use std::io::Read;
use std::path::{Path, PathBuf};

/// Unified input abstraction for the text sources the processor accepts
pub enum Input {
    /// Direct text input
    Text(String),
    /// File path input
    File(PathBuf),
    /// Raw bytes input
    Bytes(Vec<u8>),
    /// Reader input (boxed for object safety)
    Reader(Box<dyn Read + Send + Sync>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_struct("Input::Text")
                .field("length", &text.len())
                .finish(),
            Input::File(path) => f.debug_struct("Input::File").field("path", path).finish(),
            Input::Bytes(bytes) => f
                .debug_struct("Input::Bytes")
                .field("length", &bytes.len())
                .finish(),
            Input::Reader(_) => f.debug_struct("Input::Reader").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from a file path
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    /// Create input from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader(reader: impl Read + Send + Sync + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Convert input to bytes
    pub(crate) fn into_bytes(self) -> Result<Vec<u8>, crate::api::Error> {
        match self {
            Input::Text(text) => Ok(text.into_bytes()),
            Input::Bytes(bytes) => Ok(bytes),
            Input::File(path) => std::fs::read(&path).map_err(|e| {
                crate::api::Error::Infrastructure(format!(
                    "Failed to read file {}: {}",
                    path.display(),
                    e
                ))
            }),
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer).map_err(|e| {
                    crate::api::Error::Infrastructure(format!("Failed to read from reader: {}", e))
                })?;
                Ok(buffer)
            }
        }
    }

    /// Get text content from input
    pub(crate) fn into_text(self) -> Result<String, crate::api::Error> {
        let bytes = self.into_bytes()?;
        String::from_utf8(bytes).map_err(|e| {
            crate::api::Error::Infrastructure(format!("Invalid UTF-8 encoding: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_round_trip() {
        let input = Input::from_text("The dog ran.");
        assert_eq!(input.into_text().unwrap(), "The dog ran.");
    }

    #[test]
    fn test_bytes_round_trip() {
        let input = Input::from_bytes(b"plain bytes".to_vec());
        assert_eq!(input.into_bytes().unwrap(), b"plain bytes");
    }

    #[test]
    fn test_reader_input() {
        let input = Input::from_reader(std::io::Cursor::new("from a reader"));
        assert_eq!(input.into_text().unwrap(), "from a reader");
    }

    #[test]
    fn test_invalid_utf8_is_infrastructure_error() {
        let input = Input::from_bytes(vec![0xff, 0xfe, 0xfd]);
        let error = input.into_text().unwrap_err();
        assert!(matches!(error, crate::api::Error::Infrastructure(_)));
    }

    #[test]
    fn test_missing_file_is_infrastructure_error() {
        let input = Input::from_file("/nonexistent/input.txt");
        let error = input.into_text().unwrap_err();
        assert!(error.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_debug_hides_content() {
        let debug = format!("{:?}", Input::from_text("secret text"));
        assert!(debug.contains("length"));
        assert!(!debug.contains("secret"));
    }
}
