// Copyright 2025 the Eventstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-agnostic time for the throttle.
//!
//! The pipeline only ever asks "how many milliseconds is it now?"; where
//! those milliseconds come from is the host's business. Frameworks with
//! their own frame clock implement [`Clock`] over it, tests and headless
//! embedders use [`ManualClock`], and `std` hosts can reach for
//! [`SystemClock`].

/// A monotonic millisecond clock.
///
/// Implementations must be monotonic non-decreasing; the throttle compares
/// consecutive readings and a backwards jump would freeze recomputation for
/// one interval.
pub trait Clock {
    /// Returns the current time in milliseconds from an arbitrary origin.
    fn now_ms(&mut self) -> f64;
}

/// A clock driven explicitly by the caller.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ManualClock {
    now_ms: f64,
}

impl ManualClock {
    /// Creates a clock starting at `now_ms`.
    #[must_use]
    pub fn new(now_ms: f64) -> Self {
        Self { now_ms }
    }

    /// Advances the clock by `delta_ms`.
    pub fn advance(&mut self, delta_ms: f64) {
        self.now_ms += delta_ms;
    }

    /// Jumps the clock to an absolute reading.
    pub fn set(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&mut self) -> f64 {
        self.now_ms
    }
}

/// A wall-clock [`Clock`] measuring from its own creation.
#[cfg(feature = "std")]
#[derive(Copy, Clone, Debug)]
pub struct SystemClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl SystemClock {
    /// Creates a clock whose origin is the moment of the call.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now_ms(&mut self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1_000.0
    }
}
