// File:    sampler.rs
// Author:  cipherpad contributors
// Date:    2026-08-30
//
// Description: Uniform integer sampling used to populate pads, with an optional ban on immediate repeats.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Uniform integer sampling over a closed range.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws successive integers uniformly from an inclusive range.
///
/// When constructed with `allow_repeats = false`, a draw that equals the
/// previously returned value is discarded: the generator is reseeded from OS
/// entropy and the draw is repeated until it differs. The policy bounds only
/// *consecutive* returns; a value may still recur at a distance.
#[derive(Debug)]
pub struct UniformSampler {
    min: i32,
    max: i32,
    allow_repeats: bool,
    last: Option<i32>,
    rng: StdRng,
}

impl UniformSampler {
    /// Creates a sampler over the inclusive range `[min, max]`, seeded from
    /// OS entropy.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    #[must_use]
    pub fn new(min: i32, max: i32, allow_repeats: bool) -> Self {
        assert!(min <= max, "sampler range is inverted: [{min}, {max}]");
        Self {
            min,
            max,
            allow_repeats,
            last: None,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a deterministic sampler from an explicit seed.
    ///
    /// Useful for reproducible tests; note that a no-repeat collision still
    /// reseeds from OS entropy and breaks determinism from that point on.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    #[must_use]
    pub fn with_seed(min: i32, max: i32, allow_repeats: bool, seed: u64) -> Self {
        assert!(min <= max, "sampler range is inverted: [{min}, {max}]");
        Self {
            min,
            max,
            allow_repeats,
            last: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns one sample uniformly distributed over the configured range.
    pub fn sample(&mut self) -> i32 {
        self.draw(self.min, self.max)
    }

    /// Returns one sample from `[min, max]`, overriding the configured range
    /// for this draw only. The repeat policy still applies.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn sample_in(&mut self, min: i32, max: i32) -> i32 {
        assert!(min <= max, "sampler range is inverted: [{min}, {max}]");
        self.draw(min, max)
    }

    /// The most recent value returned, if any draw has happened yet.
    #[must_use]
    pub const fn current(&self) -> Option<i32> {
        self.last
    }

    fn draw(&mut self, min: i32, max: i32) -> i32 {
        let mut value = self.rng.random_range(min..=max);
        if !self.allow_repeats && min < max {
            // A colliding draw must not re-evaluate the same generator
            // stream, or a stalled generator could collide forever.
            while self.last == Some(value) {
                self.rng = StdRng::from_os_rng();
                value = self.rng.random_range(min..=max);
            }
        }
        self.last = Some(value);
        value
    }
}
