use std::path::PathBuf;

/// Why a parsed keypair file was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedKeypair {
    #[error("expected a JSON array of byte values")]
    NotAnArray,

    #[error("element #{index} is not a byte value (0-255): {value}")]
    NotAByte { index: usize, value: String },

    #[error("expected at least 64 bytes, got {len}")]
    TooShort { len: usize },
}

/// Errors thrown while extracting the program id.
#[derive(Debug, thiserror::Error)]
pub enum KeyIdError {
    #[error("keypair file {} not found or unreadable: {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("keypair file {} is not valid JSON: {source}", .path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed keypair in {}: {reason}", .path.display())]
    MalformedKeypair {
        path: PathBuf,
        reason: MalformedKeypair,
    },

    #[error("failed to write {}: {source}", .path.display())]
    OutputError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
