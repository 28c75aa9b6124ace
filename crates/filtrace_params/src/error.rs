//! Error types for parameters-file loading and writing.

/// Errors that can occur when loading or writing a `default.parameters` file.
#[derive(Debug, thiserror::Error)]
pub enum ParamsError {
    /// An I/O error occurred while reading or writing the parameters file.
    #[error("failed to access parameters file: {0}")]
    Io(#[from] std::io::Error),

    /// The file content could not be parsed.
    #[error("failed to parse parameters: {0}")]
    Parse(String),

    /// The default parameters could not be serialized.
    #[error("failed to serialize parameters: {0}")]
    Serialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_parse() {
        let err = ParamsError::Parse("expected '=' at line 2".to_string());
        assert_eq!(
            format!("{err}"),
            "failed to parse parameters: expected '=' at line 2"
        );
    }

    #[test]
    fn display_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ParamsError::Io(io_err);
        assert!(format!("{err}").starts_with("failed to access parameters file:"));
    }

    #[test]
    fn display_serialize() {
        let err = ParamsError::Serialize("unsupported value".to_string());
        assert_eq!(
            format!("{err}"),
            "failed to serialize parameters: unsupported value"
        );
    }
}
