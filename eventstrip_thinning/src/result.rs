// Copyright 2025 the Eventstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The output of a thinning pass.

use alloc::vec::Vec;

/// A partition of a candidate slice into rendered and dropped events.
///
/// Both lists are in chronological (input) order. Every input event appears
/// in exactly one of the two lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThinningResult<T> {
    /// The events to realize, at most the render budget, chronological.
    pub selected: Vec<T>,
    /// The events dropped to stay inside the budget, chronological.
    pub discarded: Vec<T>,
}

// Not derived: the derive would bound `T: Default` for no reason.
impl<T> Default for ThinningResult<T> {
    fn default() -> Self {
        Self {
            selected: Vec::new(),
            discarded: Vec::new(),
        }
    }
}

impl<T> ThinningResult<T> {
    /// Returns `true` when at least one event was dropped.
    ///
    /// Hosts typically use this to toggle UI affordances such as fade
    /// indicators on occluded regions of the strip.
    #[must_use]
    pub fn is_thinning_active(&self) -> bool {
        !self.discarded.is_empty()
    }

    /// Total number of events that went into the pass.
    #[must_use]
    pub fn input_len(&self) -> usize {
        self.selected.len() + self.discarded.len()
    }
}
