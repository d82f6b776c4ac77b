//! Thin path probes the engine needs from the file system.

use std::fs;
use std::path::Path;

use crate::error::{PadError, PadResult};

/// Size in bytes of the file at `path`.
///
/// # Errors
///
/// Returns [`PadError::NotFound`] if the path cannot be queried.
pub fn byte_size(path: &Path) -> PadResult<u64> {
    fs::metadata(path)
        .map(|m| m.len())
        .map_err(|source| PadError::NotFound {
            path: path.to_path_buf(),
            source,
        })
}

/// Whether a file system entry exists at `path`.
#[must_use]
pub fn exists(path: &Path) -> bool {
    path.exists()
}
