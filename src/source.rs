// Loader: reads the script to publish.

use crate::error::{PasteError, Result};
use std::path::Path;

/// Read the whole file at `path` as UTF-8 text.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| PasteError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| PasteError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "loaded source");
    Ok(text)
}
