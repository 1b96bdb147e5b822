// Copyright 2025 the Eventstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=eventstrip_pipeline --heading-base-level=0

//! Eventstrip Pipeline: the throttled scale → window → thinning chain.
//!
//! This crate composes the three lower eventstrip layers into a single
//! per-frame entry point. A host hands [`FilterPipeline::compute`] the full
//! event list and the current viewport signal (camera distance plus marker
//! coordinate); the pipeline places every event on the strip with
//! `eventstrip_scale`, derives the visible window with `eventstrip_window`,
//! thins the in-window candidates to the render budget with
//! `eventstrip_thinning`, and returns the stable selection.
//!
//! Because the render loop may ask many times per second while the full
//! chain is worth recomputing only a few times per second, the pipeline
//! throttles: calls arriving within `throttle_interval_ms` of the last real
//! computation return the cached result unchanged, ignoring input drift
//! inside the interval.
//!
//! The core concepts are:
//!
//! - [`TimedEvent`]: the minimal view of a host event (stable id plus
//!   millisecond timestamp); nothing else is ever inspected.
//! - [`ViewportSignal`]: the per-frame camera/marker sample.
//! - [`PipelineConfig`]: every tunable of the chain, validated once by
//!   [`FilterPipeline::new`]; invalid values are rejected there, never
//!   checked per frame.
//! - [`Clock`]: host-agnostic time for the throttle. [`ManualClock`] suits
//!   tests and embedders that drive time themselves; [`SystemClock`]
//!   (`std` feature) reads the wall clock.
//! - [`SideChannel`]: the dropped events plus a thinning-active flag,
//!   exposed through [`FilterPipeline::last_side_channel`] so a UI layer can
//!   hint at occluded events. Propagation timing is entirely the caller's:
//!   forward the getter's value over any callback or message transport.
//!
//! The pipeline is synchronous and single-threaded; `compute` takes
//! `&mut self`, making the single-writer discipline explicit. Wrap the
//! pipeline in a lock if several callers share it — the three underlying
//! layers are pure and freely shareable, only this cache is not.
//!
//! ## Minimal example
//!
//! ```rust
//! use eventstrip_pipeline::{
//!     FilterPipeline, ManualClock, PipelineConfig, TimedEvent, ViewportSignal,
//! };
//!
//! #[derive(Clone)]
//! struct Commit {
//!     id: u64,
//!     timestamp_ms: f64,
//! }
//!
//! impl TimedEvent for Commit {
//!     type Id = u64;
//!
//!     fn id(&self) -> u64 {
//!         self.id
//!     }
//!
//!     fn timestamp_ms(&self) -> f64 {
//!         self.timestamp_ms
//!     }
//! }
//!
//! let events: Vec<Commit> = (0..500)
//!     .map(|i| Commit {
//!         id: i,
//!         timestamp_ms: i as f64 * 3_600_000.0,
//!     })
//!     .collect();
//!
//! let mut pipeline =
//!     FilterPipeline::new(PipelineConfig::default(), ManualClock::new(0.0)).unwrap();
//!
//! let signal = ViewportSignal {
//!     camera_distance: 80.0,
//!     marker_position: 0.0,
//! };
//! let result = pipeline.compute(&events, signal);
//! assert!(!result.selected.is_empty());
//! assert!(result.selected.len() <= 300);
//! ```
//!
//! This crate is `no_std` and uses `alloc`; the `std` feature (on by
//! default) adds [`SystemClock`].

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod clock;
mod event;
mod pipeline;

pub use clock::{Clock, ManualClock};
pub use event::{TimedEvent, ViewportSignal};
pub use pipeline::{FilterPipeline, PipelineConfig, PipelineConfigError, SideChannel};

#[cfg(feature = "std")]
pub use clock::SystemClock;

// The lower layers are part of this crate's API surface.
pub use eventstrip_scale::{
    CountingTrace, ScaleConfig, ScaleConfigError, ScaleOp, ScaleTrace, TimeRange, TimelineScale,
};
pub use eventstrip_thinning::ThinningResult;
pub use eventstrip_window::{Window, WindowConfig, WindowConfigError};
