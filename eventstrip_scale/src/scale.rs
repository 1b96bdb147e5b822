// Copyright 2025 the Eventstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The validated timeline scale and its configuration.

use core::fmt;

use crate::trace::{ScaleOp, ScaleTrace};

/// Inclusive `[min, max]` timestamp extrema of a full event set.
///
/// Timestamps are absolute milliseconds and totally ordered. A range where
/// `min == max` is *degenerate*: every event shares one instant (or the set
/// holds a single event), and mapping falls back to even index-based spread.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimeRange {
    /// Earliest timestamp in the set.
    pub min: f64,
    /// Latest timestamp in the set.
    pub max: f64,
}

impl TimeRange {
    /// Creates a range from the given extrema.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Computes the extrema of an arbitrary timestamp sequence.
    ///
    /// Returns `None` for an empty sequence. Non-finite timestamps are
    /// skipped; if nothing finite remains, returns `None`.
    #[must_use]
    pub fn from_timestamps<I: IntoIterator<Item = f64>>(timestamps: I) -> Option<Self> {
        let mut range: Option<Self> = None;
        for t in timestamps {
            if !t.is_finite() {
                continue;
            }
            range = Some(match range {
                None => Self::new(t, t),
                Some(r) => Self::new(r.min.min(t), r.max.max(t)),
            });
        }
        range
    }

    /// Returns `true` when `min == max` (single instant or single event).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// The extent of the range, `max - min`.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

/// Error returned when a [`ScaleConfig`] fails validation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ScaleConfigError {
    /// A configuration field is NaN or infinite.
    NonFinite,
    /// `spacing` is zero or negative.
    NonPositiveSpacing,
    /// `min_length` is zero or negative.
    NonPositiveMinLength,
    /// `max_length` is smaller than `min_length`.
    InvertedLengthBounds,
}

impl fmt::Display for ScaleConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite => write!(f, "scale configuration contains a non-finite value"),
            Self::NonPositiveSpacing => write!(f, "spacing must be positive"),
            Self::NonPositiveMinLength => write!(f, "min_length must be positive"),
            Self::InvertedLengthBounds => write!(f, "max_length must be >= min_length"),
        }
    }
}

impl core::error::Error for ScaleConfigError {}

/// Configuration for a [`TimelineScale`].
///
/// Validation happens once, at construction time; the per-frame mapping
/// operations never re-check these fields.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScaleConfig {
    /// Coordinate distance between adjacent events used for sizing the strip
    /// and for the degenerate even-spread fallback.
    pub spacing: f64,
    /// Lower bound on the strip length, used for small or empty sets.
    pub min_length: f64,
    /// Upper bound on the strip length, used for very large sets.
    pub max_length: f64,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            spacing: 5.0,
            min_length: 100.0,
            max_length: 500.0,
        }
    }
}

impl ScaleConfig {
    /// Validates the configuration into a usable [`TimelineScale`].
    pub fn validate(self) -> Result<TimelineScale, ScaleConfigError> {
        if !self.spacing.is_finite() || !self.min_length.is_finite() || !self.max_length.is_finite()
        {
            return Err(ScaleConfigError::NonFinite);
        }
        if self.spacing <= 0.0 {
            return Err(ScaleConfigError::NonPositiveSpacing);
        }
        if self.min_length <= 0.0 {
            return Err(ScaleConfigError::NonPositiveMinLength);
        }
        if self.max_length < self.min_length {
            return Err(ScaleConfigError::InvertedLengthBounds);
        }
        Ok(TimelineScale { config: self })
    }
}

/// A validated timestamp-to-coordinate scale.
///
/// The strip occupies `[-length / 2, +length / 2]` where the length depends
/// only on the event count, so coordinates are stable across frames while
/// the event set keeps its size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimelineScale {
    config: ScaleConfig,
}

impl TimelineScale {
    /// Returns the configuration this scale was validated from.
    #[must_use]
    pub fn config(&self) -> ScaleConfig {
        self.config
    }

    /// Returns the strip length for an event set of `count` events.
    ///
    /// The length is `count * spacing` clamped to the configured
    /// `[min_length, max_length]`; an empty set yields `min_length`.
    #[must_use]
    pub fn length(&self, count: usize) -> f64 {
        let natural = count as f64 * self.config.spacing;
        natural.clamp(self.config.min_length, self.config.max_length)
    }

    /// Maps a timestamp to its strip coordinate, silently absorbing invalid
    /// input.
    ///
    /// See [`position_of_traced`](Self::position_of_traced) for the reporting
    /// variant; this form routes warnings to a no-op sink.
    #[must_use]
    pub fn position_of(&self, timestamp: f64, range: TimeRange, count: usize, index: usize) -> f64 {
        self.position_of_traced(timestamp, range, count, index, &mut ())
    }

    /// Maps a timestamp to its strip coordinate, reporting invalid input.
    ///
    /// `index` is the event's rank within the chronologically sorted set and
    /// is only consulted when `range` is degenerate, in which case events are
    /// spread evenly around the origin in index order at `spacing` intervals,
    /// tightened as needed so the whole spread fits the strip.
    ///
    /// For a non-degenerate finite range the mapping is monotonic
    /// non-decreasing in `timestamp`. Invalid input (non-finite values or
    /// `count == 0`) reports [`ScaleOp::PositionOf`] to `trace` and yields
    /// `0.0`. The result is always finite, and for timestamps inside `range`
    /// it lies within `[-length / 2, +length / 2]`.
    #[must_use]
    pub fn position_of_traced(
        &self,
        timestamp: f64,
        range: TimeRange,
        count: usize,
        index: usize,
        trace: &mut impl ScaleTrace,
    ) -> f64 {
        if !timestamp.is_finite() || !range.is_finite() || count == 0 {
            trace.invalid_input(ScaleOp::PositionOf);
            return 0.0;
        }
        if range.is_degenerate() {
            // All events share one instant: spread by index around the
            // origin. The spacing tightens when the configured one would
            // push the spread past the clamped strip length.
            let spacing = self.config.spacing.min(self.length(count) / count as f64);
            return (index as f64 - (count as f64 - 1.0) / 2.0) * spacing;
        }
        let normalized = (timestamp - range.min) / range.span() - 0.5;
        normalized * self.length(count)
    }

    /// Maps a strip coordinate back to a timestamp, silently absorbing
    /// invalid input.
    ///
    /// See [`date_of_traced`](Self::date_of_traced) for the reporting
    /// variant; this form routes warnings to a no-op sink.
    #[must_use]
    pub fn date_of(&self, position: f64, range: TimeRange, count: usize) -> f64 {
        self.date_of_traced(position, range, count, &mut ())
    }

    /// Maps a strip coordinate back to a timestamp, reporting invalid input.
    ///
    /// This inverts the non-degenerate branch of
    /// [`position_of_traced`](Self::position_of_traced): for any timestamp
    /// `t` inside `range`, `date_of(position_of(t, ..), ..)` is `t` within
    /// float tolerance. Out-of-range positions clamp to `range.min` /
    /// `range.max`; a degenerate range always yields `range.min`. Invalid
    /// input reports [`ScaleOp::DateOf`] to `trace` and yields `range.min`
    /// when that is finite, `0.0` otherwise.
    #[must_use]
    pub fn date_of_traced(
        &self,
        position: f64,
        range: TimeRange,
        count: usize,
        trace: &mut impl ScaleTrace,
    ) -> f64 {
        if !position.is_finite() || !range.is_finite() || count == 0 {
            trace.invalid_input(ScaleOp::DateOf);
            return if range.min.is_finite() { range.min } else { 0.0 };
        }
        if range.is_degenerate() {
            return range.min;
        }
        let normalized = position / self.length(count) + 0.5;
        let timestamp = range.min + normalized * range.span();
        timestamp.clamp(range.min, range.max)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::trace::CountingTrace;

    fn scale() -> TimelineScale {
        ScaleConfig::default().validate().unwrap()
    }

    #[test]
    fn length_is_clamped_to_configured_bounds() {
        let s = scale();
        assert_eq!(s.length(0), 100.0);
        assert_eq!(s.length(10), 100.0);
        assert_eq!(s.length(40), 200.0);
        assert_eq!(s.length(10_000), 500.0);
    }

    #[test]
    fn validate_rejects_bad_configs() {
        let bad = ScaleConfig {
            spacing: 0.0,
            ..ScaleConfig::default()
        };
        assert_eq!(bad.validate(), Err(ScaleConfigError::NonPositiveSpacing));

        let bad = ScaleConfig {
            min_length: 200.0,
            max_length: 100.0,
            ..ScaleConfig::default()
        };
        assert_eq!(bad.validate(), Err(ScaleConfigError::InvertedLengthBounds));

        let bad = ScaleConfig {
            max_length: f64::NAN,
            ..ScaleConfig::default()
        };
        assert_eq!(bad.validate(), Err(ScaleConfigError::NonFinite));
    }

    #[test]
    fn position_is_monotonic_in_timestamp() {
        let s = scale();
        let range = TimeRange::new(0.0, 10_000.0);
        let mut last = f64::NEG_INFINITY;
        for i in 0..=100 {
            let t = f64::from(i) * 100.0;
            let p = s.position_of(t, range, 50, 0);
            assert!(p >= last, "position must not decrease with timestamp");
            last = p;
        }
    }

    #[test]
    fn position_round_trips_through_date() {
        let s = scale();
        let range = TimeRange::new(1_000.0, 9_000.0);
        for i in 0..=20 {
            let t = 1_000.0 + f64::from(i) * 400.0;
            let p = s.position_of(t, range, 200, 0);
            let back = s.date_of(p, range, 200);
            assert!((back - t).abs() < 1e-6, "round trip drifted: {t} -> {back}");
        }
    }

    #[test]
    fn degenerate_range_spreads_by_index() {
        let s = scale();
        let range = TimeRange::new(500.0, 500.0);
        // 10 identical timestamps: -22.5, -17.5, .., 22.5 at spacing 5.
        for index in 0..10 {
            let p = s.position_of(500.0, range, 10, index);
            let expected = (index as f64 - 4.5) * 5.0;
            assert!((p - expected).abs() < 1e-12, "index {index}: {p}");
        }
        assert_eq!(s.date_of(-22.5, range, 10), 500.0);
    }

    #[test]
    fn degenerate_spread_stays_inside_the_strip() {
        let s = scale();
        let range = TimeRange::new(500.0, 500.0);
        // 1000 identical timestamps at the configured spacing would span
        // 5000 strip units; the strip itself clamps to 500.
        let half = s.length(1000) / 2.0;
        for index in [0, 1, 499, 500, 998, 999] {
            let p = s.position_of(500.0, range, 1000, index);
            assert!(p.abs() <= half, "index {index} escaped the strip: {p}");
        }
        // The tightened spacing keeps the spread even and symmetric.
        assert_eq!(s.position_of(500.0, range, 1000, 0), -249.75);
        assert_eq!(s.position_of(500.0, range, 1000, 999), 249.75);
    }

    #[test]
    fn out_of_range_positions_clamp_to_extrema() {
        let s = scale();
        let range = TimeRange::new(0.0, 1_000.0);
        assert_eq!(s.date_of(-1e9, range, 10), 0.0);
        assert_eq!(s.date_of(1e9, range, 10), 1_000.0);
    }

    #[test]
    fn invalid_input_falls_back_and_reports() {
        let s = scale();
        let range = TimeRange::new(0.0, 1_000.0);
        let mut trace = CountingTrace::new();

        let p = s.position_of_traced(f64::NAN, range, 10, 0, &mut trace);
        assert_eq!(p, 0.0);
        let p = s.position_of_traced(5.0, range, 0, 0, &mut trace);
        assert_eq!(p, 0.0);
        let t = s.date_of_traced(f64::INFINITY, range, 10, &mut trace);
        assert_eq!(t, 0.0);

        assert_eq!(trace.count(ScaleOp::PositionOf), 2);
        assert_eq!(trace.count(ScaleOp::DateOf), 1);
        assert_eq!(trace.total(), 3);
    }

    #[test]
    fn from_timestamps_skips_non_finite_values() {
        let range = TimeRange::from_timestamps([3.0, f64::NAN, 1.0, 7.0]).unwrap();
        assert_eq!(range, TimeRange::new(1.0, 7.0));
        assert_eq!(TimeRange::from_timestamps([f64::NAN]), None);
        assert_eq!(TimeRange::from_timestamps([]), None);
    }
}
