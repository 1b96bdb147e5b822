// Copyright 2025 the Eventstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=eventstrip_thinning --heading-base-level=0

//! Eventstrip Thinning: budgeted selection from over-full event windows.
//!
//! When the visible part of an event strip holds more events than the host
//! can afford to realize as on-screen objects, something has to give. This
//! crate decides *what* gives: [`thin`] reduces an over-budget candidate
//! slice to a fixed-size, chronologically ordered selection, and reports the
//! events it dropped so the host's UI layer can hint at their existence.
//!
//! The selection is marker-centered and biased toward the future:
//!
//! 1. A **reserved window** of 40% of the budget always survives around the
//!    "now" marker — 20% of the budget immediately before it, the rest at or
//!    after it, with shortfall on either side absorbed by the other.
//! 2. The remaining budget is filled **future-first**: upcoming events
//!    nearest the reserved window, soonest first.
//! 3. Whatever budget is still left goes to past events, most recent first.
//!
//! The result is one dense run of events around the marker rather than an
//! even sprinkle across the window, which keeps the neighborhood the viewer
//! is actually looking at fully populated.
//!
//! Determinism matters here: the selection feeds a renderer every frame, and
//! any instability between identical calls shows up as flicker. [`thin`] is
//! a pure function, and provided its input ordering precondition holds (see
//! below), identical calls produce identical output.
//!
//! ## Input ordering
//!
//! `events` must be sorted ascending by timestamp, with ties between equal
//! timestamps broken by a stable per-event key (such as an id), and
//! `positions` must hold the matching non-decreasing strip coordinates. With
//! that precondition, ascending index order *is* chronological order, and
//! the crate never needs to look inside the event type at all.
//!
//! ## Minimal example
//!
//! ```rust
//! use eventstrip_thinning::thin;
//!
//! // 8 events at unit spacing, marker between indices 3 and 4, budget 5.
//! let events: Vec<u32> = (0..8).collect();
//! let positions: Vec<f64> = (0..8).map(f64::from).collect();
//!
//! let result = thin(&events, &positions, 5, 3.5);
//! assert_eq!(result.selected.len(), 5);
//! assert_eq!(result.selected.len() + result.discarded.len(), events.len());
//! assert!(result.is_thinning_active());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod result;
mod thin;

pub use result::ThinningResult;
pub use thin::thin;
