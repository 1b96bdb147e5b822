// Copyright 2025 the Eventstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Soft-warning sinks for the mapping operations.
//!
//! Mapping runs on the per-frame path, so invalid numeric input must not
//! panic or poison downstream coordinates. The mapping operations instead
//! substitute a safe default and, in their `_traced` variants, report the
//! substitution to a caller-supplied [`ScaleTrace`]. Hosts can forward the
//! reports to their logging or metrics layer; [`CountingTrace`] is a
//! ready-made recorder for embedders that only need totals.

/// The mapping operation that observed invalid input.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ScaleOp {
    /// Timestamp-to-coordinate mapping.
    PositionOf,
    /// Coordinate-to-timestamp mapping.
    DateOf,
}

/// A callback sink for soft numeric warnings.
///
/// Implementations must be cheap: the sink is invoked from per-frame code.
pub trait ScaleTrace {
    /// Called when `op` received a NaN/infinite value or an empty event set
    /// and substituted its documented safe default.
    fn invalid_input(&mut self, op: ScaleOp);
}

/// No-op sink used by the silent mapping variants.
impl ScaleTrace for () {
    #[inline]
    fn invalid_input(&mut self, _op: ScaleOp) {}
}

/// Counts warnings per operation.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct CountingTrace {
    position_of: u64,
    date_of: u64,
}

impl CountingTrace {
    /// Creates a recorder with all counters at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets all counters to zero.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns the number of warnings recorded for `op`.
    #[must_use]
    pub fn count(&self, op: ScaleOp) -> u64 {
        match op {
            ScaleOp::PositionOf => self.position_of,
            ScaleOp::DateOf => self.date_of,
        }
    }

    /// Returns the number of warnings recorded across all operations.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.position_of + self.date_of
    }
}

impl ScaleTrace for CountingTrace {
    fn invalid_input(&mut self, op: ScaleOp) {
        match op {
            ScaleOp::PositionOf => self.position_of += 1,
            ScaleOp::DateOf => self.date_of += 1,
        }
    }
}
