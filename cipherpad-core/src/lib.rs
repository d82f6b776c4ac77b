// File:    lib.rs
// Author:  cipherpad contributors
// Date:    2026-08-30
//
// Description: The main library crate for cipherpad-core, orchestrating pad generation, transforms, caching, and import/export.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Cipherpad Core Library
//!
//! A symmetric stream cipher keyed by a disposable numeric pad. The engine
//! generates pads, applies two byte-transform families (additive and XOR) to
//! buffers and files, keeps a name-keyed cache of pad snapshots, and reads
//! and writes a whitespace-separated textual pad format.
//!
//! Despite the lineage of the name, pads here are reusable key material, not
//! a cryptographic one-time pad: there is no key exchange, no authentication,
//! and no protection against pad reuse.

/// Name-keyed storage of pad snapshots, with JSON persistence.
pub mod cache;
/// The pad engine: active pad, transforms, and file application.
pub mod engine;
/// Error types shared across the crate.
pub mod error;
/// Path probes used by the engine's file operations.
pub mod fsio;
/// The pad value type, its rendering, and textual parsing.
pub mod pad;
/// Uniform integer sampling used to populate pads.
pub mod sampler;

pub use cache::PadCache;
pub use engine::{PadEngine, Transform};
pub use error::{PadError, PadResult};
pub use pad::Pad;
pub use sampler::UniformSampler;
