// File:    pad.rs
// Author:  cipherpad contributors
// Date:    2026-08-30
//
// Description: The pad value type, its textual rendering, and strict parsing of the textual form.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The pad value type and its textual form.

use serde::{Deserialize, Serialize};

use crate::error::{PadError, PadResult};

/// An ordered sequence of signed integers used as cipher key material.
///
/// A `Pad` is a plain value: cloning it yields a snapshot that is fully
/// independent of the original, which is what the cache relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pad {
    values: Vec<i32>,
}

impl Pad {
    /// Creates a pad holding the given values, in order.
    #[must_use]
    pub const fn new(values: Vec<i32>) -> Self {
        Self { values }
    }

    /// Parses a whitespace-separated sequence of decimal integers.
    ///
    /// Parsing is strict: every token must be numeric. A partial parse never
    /// produces a pad.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::MalformedPad`] naming the first token that is not
    /// a valid integer.
    pub fn from_text(text: &str) -> PadResult<Self> {
        let mut values = Vec::new();
        for token in text.split_whitespace() {
            let value = token.parse::<i32>().map_err(|_| PadError::MalformedPad {
                token: token.to_owned(),
            })?;
            values.push(value);
        }
        Ok(Self { values })
    }

    /// Number of values in the pad.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the pad holds no values.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The pad's values, in order.
    #[must_use]
    pub const fn values(&self) -> &[i32] {
        self.values.as_slice()
    }

    /// Renders the pad as text: each value followed by a single space, in
    /// pad order. The output of `render` always parses back via
    /// [`Pad::from_text`] into an equal pad.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for value in &self.values {
            out.push_str(&value.to_string());
            out.push(' ');
        }
        out
    }

    /// The pad value at `index` reduced to a single byte, or `None` past the
    /// end of the pad.
    ///
    /// Reduction is modulo 256 via `rem_euclid`, so negative values map into
    /// `0..=255` the same way on every call. Both transform families use
    /// this reduction, which is what makes their passes exact inverses.
    #[must_use]
    pub fn byte_at(&self, index: usize) -> Option<u8> {
        self.values
            .get(index)
            .map(|v| u8::try_from(v.rem_euclid(256)).unwrap_or(0))
    }
}
