// Copyright 2025 the Eventstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The minimal host-event view and the per-frame viewport sample.

/// The pipeline's view of one host event.
///
/// Events are otherwise opaque: the pipeline never fetches, validates, or
/// mutates their content. The id must be unique and stable across frames —
/// it breaks ties between equal timestamps, which is what makes the whole
/// chain deterministic.
pub trait TimedEvent {
    /// Stable unique identifier, used as the chronological tie-breaker.
    type Id: Copy + Ord;

    /// Returns the event's identifier.
    fn id(&self) -> Self::Id;

    /// Returns the event's absolute timestamp in milliseconds.
    fn timestamp_ms(&self) -> f64;
}

/// One frame's camera and marker sample.
///
/// Produced by the host's camera/animation subsystem; the pipeline reads
/// camera state, it never sets it. The marker is the coordinate the viewer
/// is centered on, which is not necessarily the camera's own coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewportSignal {
    /// Camera distance from the strip, in world units.
    pub camera_distance: f64,
    /// Strip coordinate of the scrubbing "now" marker.
    pub marker_position: f64,
}
