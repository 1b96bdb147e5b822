// Copyright 2025 the Eventstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed coordinate interval type.

/// A closed coordinate interval `[min, max]` on the strip.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Window {
    /// Lower edge of the interval.
    pub min: f64,
    /// Upper edge of the interval.
    pub max: f64,
}

impl Window {
    /// Creates a window from its edges.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Creates a zero-width window at a single coordinate.
    #[must_use]
    pub fn point(at: f64) -> Self {
        Self { min: at, max: at }
    }

    /// The extent of the window, `max - min`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// The coordinate halfway between the edges.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.min + self.width() / 2.0
    }

    /// Returns `true` if `position` lies inside the closed interval.
    #[must_use]
    pub fn contains(&self, position: f64) -> bool {
        position >= self.min && position <= self.max
    }

    /// Returns `true` when the window is a single coordinate.
    #[must_use]
    pub fn is_point(&self) -> bool {
        self.min == self.max
    }

    /// Clamps this window to lie inside `bounds`.
    #[must_use]
    pub fn clamp_to(&self, bounds: Self) -> Self {
        Self {
            min: self.min.max(bounds.min),
            max: self.max.min(bounds.max),
        }
    }

    /// Counts how many of the sorted `positions` fall inside the window.
    ///
    /// `positions` must be sorted non-decreasing; the count is computed with
    /// two binary searches. An inverted window (`min > max`) contains
    /// nothing, consistent with [`contains`](Self::contains).
    #[must_use]
    pub fn count_contained(&self, positions: &[f64]) -> usize {
        debug_assert!(
            positions.windows(2).all(|w| w[0] <= w[1]),
            "positions must be sorted non-decreasing"
        );
        let lo = positions.partition_point(|&p| p < self.min);
        let hi = positions.partition_point(|&p| p <= self.max);
        hi.saturating_sub(lo)
    }
}
