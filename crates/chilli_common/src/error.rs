//! Error types for catalog loading.
//!
//! Only the initial load can fail hard. Everything downstream of a loaded
//! catalog resolves locally with a fallback (default icon, no tag style,
//! vacuous match) and never produces an error.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal catalog load failures. No retry is attempted; the caller shows a
/// single message and skips building navigation and sections entirely.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read menu data from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("menu data is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}
