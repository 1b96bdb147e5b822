// Copyright 2025 the Eventstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The validated window calculator and its configuration.

use core::fmt;

use crate::window::Window;

/// Multiplicative growth applied per expansion iteration.
///
/// The step is intermediate between "one big jump to the ceiling" and a
/// per-event search: each iteration widens the radius enough to make
/// progress while still stopping close to the smallest radius that
/// satisfies the budget.
const EXPANSION_STEP: f64 = 1.5;

/// Error returned when a [`WindowConfig`] fails validation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum WindowConfigError {
    /// A configuration field is NaN or infinite.
    NonFinite,
    /// `min_radius` is zero or negative.
    NonPositiveRadius,
    /// `max_radius` is smaller than `min_radius`.
    InvertedRadiusBounds,
    /// `distance_scale` is zero or negative.
    NonPositiveScale,
    /// `padding_factor` or `expansion_factor` is below `1.0`.
    FactorBelowOne,
}

impl fmt::Display for WindowConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite => write!(f, "window configuration contains a non-finite value"),
            Self::NonPositiveRadius => write!(f, "min_radius must be positive"),
            Self::InvertedRadiusBounds => write!(f, "max_radius must be >= min_radius"),
            Self::NonPositiveScale => write!(f, "distance_scale must be positive"),
            Self::FactorBelowOne => {
                write!(f, "padding_factor and expansion_factor must be >= 1.0")
            }
        }
    }
}

impl core::error::Error for WindowConfigError {}

/// Configuration for a [`WindowCalculator`].
///
/// Validation happens once, at construction time; the per-frame derivation
/// never re-checks these fields.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WindowConfig {
    /// Smallest usable radius, applied when the camera is very close.
    pub min_radius: f64,
    /// Hard ceiling on the radius, applied before and during expansion.
    pub max_radius: f64,
    /// Converts camera distance into a natural radius.
    pub distance_scale: f64,
    /// Widens the natural radius so objects near the edges are already
    /// realized when they scroll into view. Must be `>= 1.0`.
    pub padding_factor: f64,
    /// Bounds how far the expansion rule may grow the initial radius, as a
    /// multiple of it. Must be `>= 1.0`.
    pub expansion_factor: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            min_radius: 5.0,
            max_radius: 250.0,
            distance_scale: 0.5,
            padding_factor: 1.2,
            expansion_factor: 3.0,
        }
    }
}

impl WindowConfig {
    /// Validates the configuration into a usable [`WindowCalculator`].
    pub fn validate(self) -> Result<WindowCalculator, WindowConfigError> {
        if !self.min_radius.is_finite()
            || !self.max_radius.is_finite()
            || !self.distance_scale.is_finite()
            || !self.padding_factor.is_finite()
            || !self.expansion_factor.is_finite()
        {
            return Err(WindowConfigError::NonFinite);
        }
        if self.min_radius <= 0.0 {
            return Err(WindowConfigError::NonPositiveRadius);
        }
        if self.max_radius < self.min_radius {
            return Err(WindowConfigError::InvertedRadiusBounds);
        }
        if self.distance_scale <= 0.0 {
            return Err(WindowConfigError::NonPositiveScale);
        }
        if self.padding_factor < 1.0 || self.expansion_factor < 1.0 {
            return Err(WindowConfigError::FactorBelowOne);
        }
        Ok(WindowCalculator { config: self })
    }
}

/// A validated viewport window calculator.
///
/// See [`WindowCalculator::compute`] for the derivation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WindowCalculator {
    config: WindowConfig,
}

impl WindowCalculator {
    /// Returns the configuration this calculator was validated from.
    #[must_use]
    pub fn config(&self) -> WindowConfig {
        self.config
    }

    /// Derives the visible window for the current camera and marker state.
    ///
    /// `positions` are the coordinates of every event inside
    /// `global_bounds`, sorted non-decreasing; `cap` is the render budget.
    ///
    /// The natural radius is `max(min_radius, camera_distance *
    /// distance_scale) * padding_factor`, clamped to `max_radius`, and the
    /// window is that radius around `marker_position` clamped to
    /// `global_bounds`. When the window holds fewer than `cap` positions and
    /// more positions exist inside the bounds, the radius grows by a fixed
    /// multiplicative step per iteration up to `expansion_factor` times the
    /// initial radius, never past `max_radius`, and the count is re-checked.
    ///
    /// Degenerate bounds (`min == max`) are returned unchanged. A marker
    /// outside `global_bounds` clamps to the nearest edge, so the returned
    /// window always satisfies `min <= max`. A non-finite camera distance
    /// falls back to the minimum radius; a non-finite marker falls back to
    /// the midpoint of `global_bounds`.
    #[must_use]
    pub fn compute(
        &self,
        camera_distance: f64,
        marker_position: f64,
        global_bounds: Window,
        cap: usize,
        positions: &[f64],
    ) -> Window {
        if global_bounds.is_point() {
            return global_bounds;
        }

        let marker = if marker_position.is_finite() {
            // A marker scrubbed past either strip edge behaves as if it sat
            // on that edge; a window built around the raw coordinate would
            // come out of `clamp_to` inverted.
            marker_position
                .max(global_bounds.min)
                .min(global_bounds.max)
        } else {
            global_bounds.midpoint()
        };
        let distance = if camera_distance.is_finite() {
            camera_distance.max(0.0)
        } else {
            0.0
        };

        let base_radius = (distance * self.config.distance_scale).max(self.config.min_radius);
        let mut radius = (base_radius * self.config.padding_factor).min(self.config.max_radius);
        let ceiling = (radius * self.config.expansion_factor).min(self.config.max_radius);

        let available = global_bounds.count_contained(positions);
        loop {
            let window =
                Window::new(marker - radius, marker + radius).clamp_to(global_bounds);
            let contained = window.count_contained(positions);
            // Stop once the budget is met, no further events can be reached,
            // or the expansion ceiling is hit.
            if contained >= cap || contained >= available || radius >= ceiling {
                return window;
            }
            radius = (radius * EXPANSION_STEP).min(ceiling);
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;
    extern crate std;

    use alloc::vec::Vec;

    use super::*;

    fn calculator() -> WindowCalculator {
        WindowConfig::default().validate().unwrap()
    }

    /// Positions `count` events evenly across `bounds`.
    fn spread(count: usize, bounds: Window) -> Vec<f64> {
        (0..count)
            .map(|i| bounds.min + bounds.width() * (i as f64) / (count.max(2) - 1) as f64)
            .collect()
    }

    #[test]
    fn validate_rejects_bad_configs() {
        let bad = WindowConfig {
            min_radius: 0.0,
            ..WindowConfig::default()
        };
        assert_eq!(bad.validate(), Err(WindowConfigError::NonPositiveRadius));

        let bad = WindowConfig {
            max_radius: 1.0,
            ..WindowConfig::default()
        };
        assert_eq!(bad.validate(), Err(WindowConfigError::InvertedRadiusBounds));

        let bad = WindowConfig {
            padding_factor: 0.5,
            ..WindowConfig::default()
        };
        assert_eq!(bad.validate(), Err(WindowConfigError::FactorBelowOne));

        let bad = WindowConfig {
            distance_scale: f64::NAN,
            ..WindowConfig::default()
        };
        assert_eq!(bad.validate(), Err(WindowConfigError::NonFinite));
    }

    #[test]
    fn window_is_centered_on_marker_and_clamped() {
        let calc = calculator();
        let bounds = Window::new(-100.0, 100.0);
        let positions = spread(50, bounds);

        // Budget already satisfied: no expansion, pure radius window.
        let w = calc.compute(100.0, 10.0, bounds, 10, &positions);
        // radius = 100 * 0.5 * 1.2 = 60.
        assert_eq!(w, Window::new(-50.0, 70.0));

        // Near the edge the window clamps to the bounds.
        let w = calc.compute(100.0, 90.0, bounds, 10, &positions);
        assert_eq!(w.max, 100.0);
        assert_eq!(w.min, 30.0);
    }

    #[test]
    fn marker_past_the_strip_edge_clamps_to_it() {
        let calc = calculator();
        let bounds = Window::new(-250.0, 250.0);
        let positions = spread(1000, bounds);

        // Close camera, marker well past the upper edge: the window hugs the
        // edge instead of inverting. radius = max(0.5, 5) * 1.2 = 6.
        let w = calc.compute(1.0, 300.0, bounds, 1, &positions);
        assert!(w.min <= w.max);
        assert_eq!(w, Window::new(244.0, 250.0));

        let w = calc.compute(1.0, -10_000.0, bounds, 1, &positions);
        assert!(w.min <= w.max);
        assert_eq!(w, Window::new(-250.0, -244.0));
    }

    #[test]
    fn degenerate_bounds_are_returned_unchanged() {
        let calc = calculator();
        let bounds = Window::point(2.5);
        assert_eq!(calc.compute(10.0, 0.0, bounds, 100, &[2.5]), bounds);
    }

    #[test]
    fn close_camera_expands_to_fill_the_budget() {
        let calc = calculator();
        let bounds = Window::new(-250.0, 250.0);
        // 500 events, one per unit of strip.
        let positions = spread(500, bounds);

        // Camera so close the natural window holds only a handful of events.
        let narrow = calc.compute(1.0, 0.0, bounds, 1, &positions);
        let narrow_count = narrow.count_contained(&positions);

        // Same camera, but a budget of 30: the window must grow.
        let wide = calc.compute(1.0, 0.0, bounds, 30, &positions);
        let wide_count = wide.count_contained(&positions);
        assert!(wide.width() > narrow.width());
        assert!(wide_count > narrow_count);
        // Expansion is bounded by expansion_factor (3x the initial radius).
        assert!(wide.width() <= narrow.width() * 3.0 + 1e-9);
    }

    #[test]
    fn expansion_never_exceeds_max_radius() {
        let config = WindowConfig {
            max_radius: 20.0,
            expansion_factor: 100.0,
            ..WindowConfig::default()
        };
        let calc = config.validate().unwrap();
        let bounds = Window::new(-250.0, 250.0);
        let positions = spread(500, bounds);

        let w = calc.compute(1.0, 0.0, bounds, 500, &positions);
        assert!(w.width() <= 40.0 + 1e-9, "radius must clamp to max_radius");
    }

    #[test]
    fn expansion_stops_when_all_events_are_reachable() {
        let calc = calculator();
        let bounds = Window::new(-100.0, 100.0);
        // Only 5 events, clustered near the marker.
        let positions = [-2.0, -1.0, 0.0, 1.0, 2.0];

        let w = calc.compute(1.0, 0.0, bounds, 300, &positions);
        assert_eq!(w.count_contained(&positions), 5);
        // All events were inside the first window; no growth required.
        assert!(w.width() <= 2.0 * WindowConfig::default().min_radius * 1.2 + 1e-9);
    }

    #[test]
    fn non_finite_inputs_fall_back_deterministically() {
        let calc = calculator();
        let bounds = Window::new(-100.0, 100.0);
        let positions = spread(50, bounds);

        let a = calc.compute(f64::NAN, f64::NAN, bounds, 10, &positions);
        let b = calc.compute(f64::NAN, f64::NAN, bounds, 10, &positions);
        assert_eq!(a, b);
        assert!(a.contains(bounds.midpoint()));
    }
}
