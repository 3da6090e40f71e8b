// Error types shared by the loader, the filter and the Pastebin client.
// `main` wraps these in `anyhow` for reporting.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PasteError>;

#[derive(Error, Debug)]
pub enum PasteError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8 text: {source}")]
    Decode {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },

    #[error("Request to Pastebin failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Pastebin answered {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("No paste code in Pastebin response: {body:?}")]
    Parse { body: String },
}

/// Coarse classification used in log fields and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    Network,
    Parse,
}

impl PasteError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PasteError::Read { .. } | PasteError::Decode { .. } => ErrorKind::Input,
            PasteError::Http(_) | PasteError::Status { .. } => ErrorKind::Network,
            PasteError::Parse { .. } => ErrorKind::Parse,
        }
    }
}
