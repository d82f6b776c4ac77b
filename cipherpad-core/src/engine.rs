// File:    engine.rs
// Author:  cipherpad contributors
// Date:    2026-08-30
//
// Description: The pad engine: owns the active pad, drives pad generation, and applies the byte transforms to buffers and files.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The pad engine and its byte transforms.

use log::debug;
use std::fs;
use std::path::Path;

use crate::cache::PadCache;
use crate::error::{PadError, PadResult};
use crate::fsio;
use crate::pad::Pad;
use crate::sampler::UniformSampler;

/// The two transform families a pad can drive.
///
/// The families are not interoperable: bytes encoded additively cannot be
/// recovered with the XOR family or vice versa. Callers must pair
/// [`PadEngine::encode`] with [`PadEngine::decode`] and
/// [`PadEngine::encrypt`] with [`PadEngine::decrypt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Byte-wise modular addition (forward) and subtraction (inverse).
    Additive,
    /// Byte-wise exclusive-or with the modulo-reduced pad value; the forward
    /// and inverse passes are the same operation.
    Xor,
}

#[derive(Clone, Copy)]
enum Direction {
    Forward,
    Inverse,
}

/// Generates pads, applies them to buffers and files, and mediates with the
/// pad cache and the file system.
///
/// An engine always owns an active [`Pad`] (initially empty) together with
/// its rendered textual form; the rendering is refreshed before any mutating
/// call returns, so [`PadEngine::rendered`] never observes a stale string.
///
/// The engine is single-threaded by design. Callers that need to share one
/// across threads must wrap the whole engine in a single mutex; nearly every
/// operation can both read and replace the active pad, so no finer locking
/// is meaningful.
#[derive(Debug)]
pub struct PadEngine {
    current: Pad,
    rendered: String,
    sampler: UniformSampler,
    cache: PadCache,
}

impl PadEngine {
    /// Creates an engine whose sampler draws from the inclusive range
    /// `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    #[must_use]
    pub fn new(min: i32, max: i32) -> Self {
        Self::with_sampler(UniformSampler::new(min, max, true))
    }

    /// Creates an engine around an explicitly configured sampler.
    #[must_use]
    pub fn with_sampler(sampler: UniformSampler) -> Self {
        Self {
            current: Pad::default(),
            rendered: String::new(),
            sampler,
            cache: PadCache::new(),
        }
    }

    /// The active pad.
    #[must_use]
    pub const fn pad(&self) -> &Pad {
        &self.current
    }

    /// The textual rendering of the active pad: each value followed by a
    /// single space, in pad order.
    #[must_use]
    pub const fn rendered(&self) -> &str {
        self.rendered.as_str()
    }

    /// The pad cache.
    #[must_use]
    pub const fn cache(&self) -> &PadCache {
        &self.cache
    }

    /// Discards the active pad and generates a fresh one of exactly
    /// `length` values drawn from the engine's sampler.
    ///
    /// Values may repeat across positions even when the sampler forbids
    /// back-to-back repeats; the policy bounds consecutive draws only.
    pub fn reroll(&mut self, length: usize) {
        let mut values = Vec::with_capacity(length);
        for _ in 0..length {
            values.push(self.sampler.sample());
        }
        self.current = Pad::new(values);
        self.refresh_rendering();
        debug!("rerolled active pad to {length} values");
    }

    /// Rerolls the active pad to match the byte length of the file at
    /// `path`, returning that length.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::NotFound`] if the file's size cannot be queried;
    /// the active pad is left unchanged in that case.
    pub fn reroll_for_file(&mut self, path: &Path) -> PadResult<u64> {
        let size = fsio::byte_size(path)?;
        self.reroll(usize::try_from(size).unwrap_or(usize::MAX));
        Ok(size)
    }

    /// Additive-family forward transform: each output byte is the input byte
    /// plus the pad value at the same position, with 8-bit wraparound.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::PadTooShort`] if the active pad has fewer values
    /// than `input` has bytes.
    pub fn encode(&self, input: &[u8]) -> PadResult<Vec<u8>> {
        self.transform_bytes(input, Transform::Additive, Direction::Forward)
    }

    /// Additive-family inverse transform; exact inverse of
    /// [`PadEngine::encode`] under the same pad.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::PadTooShort`] if the active pad has fewer values
    /// than `input` has bytes.
    pub fn decode(&self, input: &[u8]) -> PadResult<Vec<u8>> {
        self.transform_bytes(input, Transform::Additive, Direction::Inverse)
    }

    /// XOR-family transform: each output byte is the input byte XORed with
    /// the pad value at the same position reduced modulo 256. The reduction
    /// is identical on both passes, which makes the operation self-inverse.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::PadTooShort`] if the active pad has fewer values
    /// than `input` has bytes.
    pub fn encrypt(&self, input: &[u8]) -> PadResult<Vec<u8>> {
        self.transform_bytes(input, Transform::Xor, Direction::Forward)
    }

    /// XOR-family inverse; the same operation as [`PadEngine::encrypt`].
    ///
    /// # Errors
    ///
    /// Returns [`PadError::PadTooShort`] if the active pad has fewer values
    /// than `input` has bytes.
    pub fn decrypt(&self, input: &[u8]) -> PadResult<Vec<u8>> {
        self.transform_bytes(input, Transform::Xor, Direction::Inverse)
    }

    /// Applies the additive forward transform to the file at `path` in
    /// place.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::NotFound`] if the file cannot be read,
    /// [`PadError::PadTooShort`] if it is longer than the active pad, or
    /// [`PadError::WriteError`] if the transformed bytes cannot be written
    /// back. The file is never partially overwritten: the whole transformed
    /// buffer is assembled in memory before the path is rewritten.
    pub fn encode_file(&self, path: &Path) -> PadResult<()> {
        self.transform_file(path, Transform::Additive, Direction::Forward)
    }

    /// Applies the additive inverse transform to the file at `path` in
    /// place.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`PadEngine::encode_file`].
    pub fn decode_file(&self, path: &Path) -> PadResult<()> {
        self.transform_file(path, Transform::Additive, Direction::Inverse)
    }

    /// Applies the XOR transform to the file at `path` in place.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`PadEngine::encode_file`].
    pub fn encrypt_file(&self, path: &Path) -> PadResult<()> {
        self.transform_file(path, Transform::Xor, Direction::Forward)
    }

    /// Applies the XOR transform to the file at `path` in place; the same
    /// operation as [`PadEngine::encrypt_file`].
    ///
    /// # Errors
    ///
    /// Same failure modes as [`PadEngine::encode_file`].
    pub fn decrypt_file(&self, path: &Path) -> PadResult<()> {
        self.transform_file(path, Transform::Xor, Direction::Inverse)
    }

    /// Snapshots the active pad into the cache under `name`, replacing any
    /// previous entry with that name. Later changes to the active pad never
    /// affect the saved entry.
    pub fn save_to_cache(&mut self, name: impl Into<String>) {
        self.cache.insert(name, &self.current);
    }

    /// Replaces the active pad with a snapshot of the cache entry saved
    /// under `name`. The cache entry itself is unaffected by subsequent use
    /// of the loaded pad.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::CacheMiss`] if no entry exists under `name`; the
    /// active pad is left unchanged.
    pub fn load_from_cache(&mut self, name: &str) -> PadResult<()> {
        let pad = self
            .cache
            .get(name)
            .cloned()
            .ok_or_else(|| PadError::CacheMiss {
                name: name.to_owned(),
            })?;
        self.current = pad;
        self.refresh_rendering();
        debug!("loaded pad '{name}' from cache");
        Ok(())
    }

    /// Replaces the active pad with one parsed from `text`, returning the
    /// number of values imported.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::MalformedPad`] if `text` contains a non-numeric
    /// token; the active pad is left unchanged. A partial parse never
    /// becomes the active pad.
    pub fn import(&mut self, text: &str) -> PadResult<usize> {
        let pad = Pad::from_text(text)?;
        let count = pad.len();
        self.current = pad;
        self.refresh_rendering();
        debug!("imported pad with {count} values");
        Ok(count)
    }

    /// Replaces the active pad with one parsed from the full contents of the
    /// file at `path`, returning the number of values imported.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::NotFound`] if the file cannot be read, or
    /// [`PadError::MalformedPad`] if its contents do not parse completely;
    /// either way the active pad is left unchanged.
    pub fn import_from_file(&mut self, path: &Path) -> PadResult<usize> {
        let text = fs::read_to_string(path).map_err(|source| PadError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;
        self.import(&text)
    }

    /// Writes the rendering of the active pad to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::AlreadyExists`] if `overwrite` is false and a
    /// file already exists at `path` (that file is not touched), or
    /// [`PadError::WriteError`] if the destination cannot be written.
    pub fn export_to_file(&self, path: &Path, overwrite: bool) -> PadResult<()> {
        if !overwrite && fsio::exists(path) {
            return Err(PadError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }
        fs::write(path, &self.rendered).map_err(|source| PadError::WriteError {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Persists the pad cache as JSON at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::WriteError`] if the file cannot be written.
    pub fn save_cache_file(&self, path: &Path) -> PadResult<()> {
        self.cache.save(path)
    }

    /// Replaces the pad cache with one loaded from `path`. A missing file
    /// yields an empty cache. The active pad is unaffected.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::NotFound`] if the file exists but cannot be read,
    /// or [`PadError::CacheFormat`] if it does not parse as a cache.
    pub fn load_cache_file(&mut self, path: &Path) -> PadResult<()> {
        self.cache = PadCache::load(path)?;
        Ok(())
    }

    fn transform_bytes(
        &self,
        input: &[u8],
        transform: Transform,
        direction: Direction,
    ) -> PadResult<Vec<u8>> {
        // Length is enforced up front so a file transform can never fail
        // after its destination has been truncated.
        if self.current.len() < input.len() {
            return Err(PadError::PadTooShort {
                pad_len: self.current.len(),
                needed: input.len(),
            });
        }
        let out = input
            .iter()
            .enumerate()
            .map(|(index, &byte)| {
                // The pad index is this explicit running counter, never a
                // stream position. Indexing past the pad cannot happen after
                // the length check above.
                let key = self.current.byte_at(index).unwrap_or(0);
                match (transform, direction) {
                    (Transform::Additive, Direction::Forward) => byte.wrapping_add(key),
                    (Transform::Additive, Direction::Inverse) => byte.wrapping_sub(key),
                    (Transform::Xor, _) => byte ^ key,
                }
            })
            .collect();
        Ok(out)
    }

    fn transform_file(
        &self,
        path: &Path,
        transform: Transform,
        direction: Direction,
    ) -> PadResult<()> {
        let input = fs::read(path).map_err(|source| PadError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let output = self.transform_bytes(&input, transform, direction)?;
        debug!(
            "transforming '{}' in place ({} bytes)",
            path.display(),
            output.len()
        );
        fs::write(path, output).map_err(|source| PadError::WriteError {
            path: path.to_path_buf(),
            source,
        })
    }

    fn refresh_rendering(&mut self) {
        self.rendered = self.current.render();
    }
}

impl Default for PadEngine {
    /// An engine sampling from the range `[0, 100]`.
    fn default() -> Self {
        Self::new(0, 100)
    }
}
