// Copyright 2025 the Eventstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=eventstrip_window --heading-base-level=0

//! Eventstrip Window: viewport window derivation for 1D event strips.
//!
//! Given the camera's distance from the strip and the coordinate of the
//! scrubbing "now" marker, this crate derives the sub-interval of the strip
//! that is currently considered visible and therefore eligible for
//! selection. The window is centered on the *marker*, not on the camera.
//!
//! The core concepts are:
//!
//! - [`Window`]: a closed coordinate interval `[min, max]`.
//! - [`WindowConfig`]: radius bounds and scaling factors, validated once into
//!   a [`WindowCalculator`].
//! - [`WindowCalculator::compute`]: the derivation itself, including the
//!   *expansion rule*: when the natural radius (camera close to the strip)
//!   contains fewer events than the render budget while more events exist
//!   inside the global bounds, the window grows symmetrically around the
//!   marker — bounded by a multiplicative expansion ceiling and a hard
//!   maximum radius — so the budget is not left under-used.
//!
//! The calculator is a pure function of its arguments: identical input
//! always produces an identical window.
//!
//! ## Minimal example
//!
//! ```rust
//! use eventstrip_window::{Window, WindowConfig};
//!
//! let calc = WindowConfig::default().validate().unwrap();
//!
//! // Event coordinates, sorted ascending, inside the global strip bounds.
//! let positions: Vec<f64> = (0..100).map(|i| f64::from(i) - 50.0).collect();
//! let bounds = Window::new(-50.0, 50.0);
//!
//! // Camera fairly far out, marker at the origin, budget of 30 objects.
//! let window = calc.compute(40.0, 0.0, bounds, 30, &positions);
//! assert!(window.min >= bounds.min && window.max <= bounds.max);
//! assert!(window.contains(0.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod calculator;
mod window;

pub use calculator::{WindowCalculator, WindowConfig, WindowConfigError};
pub use window::Window;
