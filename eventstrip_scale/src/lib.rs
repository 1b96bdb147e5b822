// Copyright 2025 the Eventstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=eventstrip_scale --heading-base-level=0

//! Eventstrip Scale: timestamp-to-coordinate mapping for 1D event strips.
//!
//! This crate maps absolute event timestamps into a bounded 1D coordinate
//! space (the "strip") and back. It is the lowest layer of the eventstrip
//! family: the window and thinning crates consume the coordinates it
//! produces, and hosts use it to place event objects along a timeline
//! embedded in a larger scene.
//!
//! The core concepts are:
//!
//! - [`ScaleConfig`]: spacing and length bounds, validated once into a
//!   [`TimelineScale`].
//! - [`TimelineScale`]: the validated scale. Its [`length`](TimelineScale::length)
//!   depends only on the event count, so the coordinate space is stable from
//!   frame to frame as long as the event set does not change size.
//! - [`TimeRange`]: the `[min, max]` timestamp extrema of the full event set.
//! - [`ScaleTrace`]: an optional sink for soft numeric warnings. Mapping runs
//!   on the per-frame path, so invalid input (NaN, infinities, an empty set)
//!   never panics and never produces a non-finite coordinate; it falls back
//!   to a safe default and, in the `_traced` variants, reports the fallback.
//!
//! Coordinates are centered on the origin: the strip occupies
//! `[-length / 2, +length / 2]`. When every timestamp is identical the range
//! is degenerate and events are spread evenly around the origin in index
//! order instead.
//!
//! ## Minimal example
//!
//! ```rust
//! use eventstrip_scale::{ScaleConfig, TimeRange};
//!
//! let scale = ScaleConfig::default().validate().unwrap();
//! let range = TimeRange::new(0.0, 1_000.0);
//!
//! // 40 events * 5.0 spacing = 200.0 strip length.
//! assert_eq!(scale.length(40), 200.0);
//!
//! // The earliest timestamp sits at the left edge, the latest at the right.
//! let left = scale.position_of(0.0, range, 40, 0);
//! let right = scale.position_of(1_000.0, range, 40, 39);
//! assert_eq!(left, -100.0);
//! assert_eq!(right, 100.0);
//!
//! // And positions map back to timestamps.
//! let t = scale.date_of(left, range, 40);
//! assert!((t - 0.0).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod scale;
mod trace;

pub use scale::{ScaleConfig, ScaleConfigError, TimeRange, TimelineScale};
pub use trace::{CountingTrace, ScaleOp, ScaleTrace};
