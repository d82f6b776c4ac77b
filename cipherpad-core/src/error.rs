// File:    error.rs
// Author:  cipherpad contributors
// Date:    2026-08-30
//
// Description: Error types shared by all pad operations.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Error types shared by all pad operations.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type PadResult<T> = Result<T, PadError>;

/// Everything that can go wrong while generating, transforming, caching,
/// importing or exporting a pad.
#[derive(Debug, Error)]
pub enum PadError {
    /// The path could not be opened for reading.
    #[error("cannot open '{}' for reading: {source}", path.display())]
    NotFound {
        /// The path that failed to open.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// The path could not be opened for writing.
    #[error("cannot open '{}' for writing: {source}", path.display())]
    WriteError {
        /// The destination path that failed to open.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// Export refused to overwrite an existing file.
    #[error("'{}' already exists and overwrite was not permitted", path.display())]
    AlreadyExists {
        /// The path that already exists.
        path: PathBuf,
    },

    /// The active pad has fewer values than the input being transformed.
    #[error("pad has {pad_len} values but the input needs {needed}")]
    PadTooShort {
        /// Length of the active pad.
        pad_len: usize,
        /// Length the input requires.
        needed: usize,
    },

    /// Pad text contained something other than whitespace-separated integers.
    #[error("pad text contains a non-numeric token '{token}'")]
    MalformedPad {
        /// The first token that failed to parse.
        token: String,
    },

    /// No cached pad exists under the requested name.
    #[error("no cached pad named '{name}'")]
    CacheMiss {
        /// The name that was looked up.
        name: String,
    },

    /// A persisted cache file could not be parsed.
    #[error("malformed cache file: {0}")]
    CacheFormat(#[from] serde_json::Error),
}
