// Copyright 2025 the Eventstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stateful, throttled filter pipeline.

use alloc::vec::Vec;
use core::fmt;

use eventstrip_scale::{
    CountingTrace, ScaleConfig, ScaleConfigError, ScaleOp, ScaleTrace, TimeRange,
    TimelineScale,
};
use eventstrip_thinning::{ThinningResult, thin};
use eventstrip_window::{Window, WindowCalculator, WindowConfig, WindowConfigError};

use crate::clock::Clock;
use crate::event::{TimedEvent, ViewportSignal};

/// Error returned when a [`PipelineConfig`] fails validation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PipelineConfigError {
    /// The scale section is invalid.
    Scale(ScaleConfigError),
    /// The window section is invalid.
    Window(WindowConfigError),
    /// The render budget is zero.
    NonPositiveCap,
    /// The throttle interval is negative, NaN, or infinite.
    InvalidThrottle,
}

impl fmt::Display for PipelineConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scale(e) => write!(f, "invalid scale configuration: {e}"),
            Self::Window(e) => write!(f, "invalid window configuration: {e}"),
            Self::NonPositiveCap => write!(f, "cap must be positive"),
            Self::InvalidThrottle => {
                write!(f, "throttle_interval_ms must be finite and non-negative")
            }
        }
    }
}

impl core::error::Error for PipelineConfigError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Scale(e) => Some(e),
            Self::Window(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ScaleConfigError> for PipelineConfigError {
    fn from(error: ScaleConfigError) -> Self {
        Self::Scale(error)
    }
}

impl From<WindowConfigError> for PipelineConfigError {
    fn from(error: WindowConfigError) -> Self {
        Self::Window(error)
    }
}

/// Every tunable of the chain, validated once by [`FilterPipeline::new`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PipelineConfig {
    /// Timestamp-to-coordinate scale settings.
    pub scale: ScaleConfig,
    /// Viewport window derivation settings.
    pub window: WindowConfig,
    /// Hard maximum number of events to select per computation.
    pub cap: usize,
    /// Minimum wall-clock interval between full recomputations; calls inside
    /// the interval return the cached result.
    pub throttle_interval_ms: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            scale: ScaleConfig::default(),
            window: WindowConfig::default(),
            cap: 300,
            throttle_interval_ms: 250.0,
        }
    }
}

/// Thinning status published for the host's UI overlay layer.
///
/// Refreshed by every non-throttled [`FilterPipeline::compute`]; read it
/// back through [`FilterPipeline::last_side_channel`] and forward it over
/// whatever transport the host uses.
#[derive(Clone, Debug, PartialEq)]
pub struct SideChannel<T> {
    /// `true` when the last computation had to drop events.
    pub is_thinning_active: bool,
    /// The events dropped by the last computation, chronological.
    pub discarded: Vec<T>,
}

// Not derived: the derive would bound `T: Default` for no reason.
impl<T> Default for SideChannel<T> {
    fn default() -> Self {
        Self {
            is_thinning_active: false,
            discarded: Vec::new(),
        }
    }
}

/// The stateful scale → window → thinning chain with throttling.
///
/// All heavy work happens in [`compute`](Self::compute); everything else is
/// cached state from the most recent computation. The pipeline performs no
/// I/O and never suspends; callers control recomputation frequency through
/// the throttle interval rather than by cancelling in-flight work.
#[derive(Clone, Debug)]
pub struct FilterPipeline<T, C> {
    scale: TimelineScale,
    calculator: WindowCalculator,
    cap: usize,
    throttle_interval_ms: f64,
    clock: C,
    trace: CountingTrace,
    last_computed_at: Option<f64>,
    last_result: ThinningResult<T>,
    side_channel: SideChannel<T>,
}

impl<T, C> FilterPipeline<T, C>
where
    T: TimedEvent + Clone,
    C: Clock,
{
    /// Validates `config` and builds an idle pipeline around `clock`.
    pub fn new(config: PipelineConfig, clock: C) -> Result<Self, PipelineConfigError> {
        let scale = config.scale.validate()?;
        let calculator = config.window.validate()?;
        if config.cap == 0 {
            return Err(PipelineConfigError::NonPositiveCap);
        }
        if !config.throttle_interval_ms.is_finite() || config.throttle_interval_ms < 0.0 {
            return Err(PipelineConfigError::InvalidThrottle);
        }
        Ok(Self {
            scale,
            calculator,
            cap: config.cap,
            throttle_interval_ms: config.throttle_interval_ms,
            clock,
            trace: CountingTrace::new(),
            last_computed_at: None,
            last_result: ThinningResult::default(),
            side_channel: SideChannel::default(),
        })
    }

    /// Runs the chain, or returns the cached result while throttled.
    ///
    /// A call arriving within `throttle_interval_ms` of the last real
    /// computation returns the previous result unchanged — input drift
    /// inside the interval is deliberately ignored, the next unthrottled
    /// call picks it up. Otherwise the full chain runs: every event with a
    /// finite timestamp is placed on the strip in chronological order (ties
    /// broken by id), the visible window is derived from `signal`, the
    /// in-window candidates are thinned to the budget, and the result plus
    /// side channel are cached.
    ///
    /// Events with non-finite timestamps cannot be placed; they are excluded
    /// from the computation and counted in
    /// [`numeric_warnings`](Self::numeric_warnings), like any other invalid
    /// numeric input on the per-frame path.
    pub fn compute(&mut self, events: &[T], signal: ViewportSignal) -> &ThinningResult<T> {
        let now = self.clock.now_ms();
        if let Some(last) = self.last_computed_at {
            if now - last < self.throttle_interval_ms {
                return &self.last_result;
            }
        }

        let result = self.run_chain(events, signal);
        self.side_channel = SideChannel {
            is_thinning_active: result.is_thinning_active(),
            discarded: result.discarded.clone(),
        };
        self.last_result = result;
        self.last_computed_at = Some(now);
        &self.last_result
    }

    /// Returns the most recent computation's result without recomputing.
    #[must_use]
    pub fn last_result(&self) -> &ThinningResult<T> {
        &self.last_result
    }

    /// Returns the thinning status of the most recent computation.
    #[must_use]
    pub fn last_side_channel(&self) -> &SideChannel<T> {
        &self.side_channel
    }

    /// Total soft numeric warnings observed since construction.
    #[must_use]
    pub fn numeric_warnings(&self) -> u64 {
        self.trace.total()
    }

    /// Mutable access to the clock, for hosts that drive time themselves.
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    fn run_chain(&mut self, events: &[T], signal: ViewportSignal) -> ThinningResult<T> {
        // Chronological order over the placeable events, ties broken by id.
        let mut order: Vec<usize> = (0..events.len())
            .filter(|&e| events[e].timestamp_ms().is_finite())
            .collect();
        for _ in order.len()..events.len() {
            self.trace.invalid_input(ScaleOp::PositionOf);
        }
        order.sort_by(|&a, &b| {
            events[a]
                .timestamp_ms()
                .total_cmp(&events[b].timestamp_ms())
                .then_with(|| events[a].id().cmp(&events[b].id()))
        });

        let count = order.len();
        let range = TimeRange::from_timestamps(order.iter().map(|&e| events[e].timestamp_ms()))
            .unwrap_or(TimeRange::new(0.0, 0.0));
        let positions: Vec<f64> = order
            .iter()
            .enumerate()
            .map(|(index, &e)| {
                self.scale.position_of_traced(
                    events[e].timestamp_ms(),
                    range,
                    count,
                    index,
                    &mut self.trace,
                )
            })
            .collect();

        // The strip occupies [-length / 2, +length / 2].
        let length = self.scale.length(count);
        let bounds = Window::new(-length / 2.0, length / 2.0);
        let window = self.calculator.compute(
            signal.camera_distance,
            signal.marker_position,
            bounds,
            self.cap,
            &positions,
        );

        // Slice out the in-window candidates; everything outside the window
        // is simply not rendered this frame.
        let lo = positions.partition_point(|&p| p < window.min);
        let hi = positions.partition_point(|&p| p <= window.max);
        let candidates: Vec<T> = order[lo..hi].iter().map(|&e| events[e].clone()).collect();

        let now_position = if signal.marker_position.is_finite() {
            signal.marker_position
        } else {
            bounds.midpoint()
        };
        thin(&candidates, &positions[lo..hi], self.cap, now_position)
    }
}
