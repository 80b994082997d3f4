// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion between track pixel offsets and domain values.
//!
//! A thumb travels along the *track*: the container width minus the thumb
//! width, so that a thumb at `max` still fits inside the container. Offsets
//! handed to and returned from these functions are measured from the left edge
//! of the container to the left edge of the thumb.
//!
//! ```
//! use understory_range_slider::mapper::{position_to_value, value_to_position};
//!
//! // 110px container, 10px thumb: 100px of travel for the 0..=10 domain.
//! let px = value_to_position(4.0, 0.0, 10.0, 100.0);
//! assert_eq!(px, 40.0);
//! assert_eq!(position_to_value(px, 110.0, 10.0, 0.0, 10.0, 2.0), 4.0);
//!
//! // Offsets past the end of the track clamp to the domain.
//! assert_eq!(position_to_value(500.0, 110.0, 10.0, 0.0, 10.0, 2.0), 10.0);
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor` and `round`

/// Most decimal places [`decimal_places`] will report.
const MAX_DECIMAL_PLACES: u32 = 12;

/// Pixel measurements supplied by the layout collaborator.
///
/// Both widths arrive asynchronously and may be zero until the first layout
/// pass; see [`ContainerMetrics::is_measured`].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ContainerMetrics {
    /// Width of the whole slider container.
    pub container_width_px: f64,
    /// Width of one thumb.
    pub thumb_width_px: f64,
}

impl ContainerMetrics {
    /// Creates metrics from measured widths.
    #[must_use]
    pub fn new(container_width_px: f64, thumb_width_px: f64) -> Self {
        Self {
            container_width_px,
            thumb_width_px,
        }
    }

    /// Usable travel distance, `container_width_px - thumb_width_px`.
    #[must_use]
    pub fn track_width_px(&self) -> f64 {
        self.container_width_px - self.thumb_width_px
    }

    /// Returns `true` once both widths are positive and leave room to travel.
    ///
    /// Mapping is only meaningful for measured metrics.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.container_width_px.is_finite()
            && self.thumb_width_px.is_finite()
            && self.container_width_px > 0.0
            && self.thumb_width_px > 0.0
            && self.track_width_px() > 0.0
    }
}

/// Maps a domain value onto the track.
///
/// `position = (value - min) / (max - min) * track_width_px`, evaluated with
/// the multiplication first so integral inputs map exactly. The caller
/// guarantees `min < max`; values outside the domain extrapolate linearly.
#[must_use]
pub fn value_to_position(value: f64, min: f64, max: f64, track_width_px: f64) -> f64 {
    (value - min) * track_width_px / (max - min)
}

/// Maps a track offset back to a domain value.
///
/// The raw value is quantized to the nearest multiple of `step` counted from
/// `min` (exact halves go to the higher step) and then clamped to `[min, max]`.
/// When `min` and `step` are short decimals, the result is the nearest `f64`
/// to the decimal grid value, so a `0.1` step yields `0.3` rather than
/// `0.30000000000000004`.
/// The caller guarantees `container_width_px - thumb_width_px > 0`.
#[must_use]
pub fn position_to_value(
    position_px: f64,
    container_width_px: f64,
    thumb_width_px: f64,
    min: f64,
    max: f64,
    step: f64,
) -> f64 {
    let track_width_px = container_width_px - thumb_width_px;
    let offset = position_px * (max - min) / track_width_px;
    let steps = (offset / step + 0.5).floor();
    let value = match (decimal_places(min), decimal_places(step)) {
        (Some(a), Some(b)) => snap_decimal(min + steps * step, a.max(b)),
        _ => min + steps * step,
    };
    value.max(min).min(max)
}

/// Number of decimal places needed to write `x`, if it has at most
/// [`MAX_DECIMAL_PLACES`].
pub(crate) fn decimal_places(x: f64) -> Option<u32> {
    if !x.is_finite() {
        return None;
    }
    let mut scale = 1.0_f64;
    for places in 0..=MAX_DECIMAL_PLACES {
        let scaled = x * scale;
        if (scaled - scaled.round()).abs() <= 1e-9 * scaled.abs().max(1.0) {
            return Some(places);
        }
        scale *= 10.0;
    }
    None
}

/// Rounds `value` to `places` decimals, returning the nearest `f64` to that
/// decimal. Values too large to scale exactly are returned unchanged.
pub(crate) fn snap_decimal(value: f64, places: u32) -> f64 {
    let mut scale = 1.0_f64;
    for _ in 0..places {
        scale *= 10.0;
    }
    let scaled = value * scale;
    // Past 2^52 every f64 is already an integer.
    if !scaled.is_finite() || scaled.abs() >= 4_503_599_627_370_496.0 {
        return value;
    }
    scaled.round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER: f64 = 330.0;
    const THUMB: f64 = 30.0;
    const TRACK: f64 = CONTAINER - THUMB;

    #[test]
    fn metrics_require_positive_widths() {
        assert!(!ContainerMetrics::default().is_measured());
        assert!(!ContainerMetrics::new(300.0, 0.0).is_measured());
        assert!(!ContainerMetrics::new(0.0, 30.0).is_measured());
        assert!(!ContainerMetrics::new(30.0, 30.0).is_measured());
        assert!(!ContainerMetrics::new(f64::NAN, 30.0).is_measured());
        assert!(ContainerMetrics::new(CONTAINER, THUMB).is_measured());
        assert_eq!(ContainerMetrics::new(CONTAINER, THUMB).track_width_px(), TRACK);
    }

    #[test]
    fn value_to_position_is_linear_over_track() {
        assert_eq!(value_to_position(0.0, 0.0, 100.0, TRACK), 0.0);
        assert_eq!(value_to_position(50.0, 0.0, 100.0, TRACK), 150.0);
        assert_eq!(value_to_position(100.0, 0.0, 100.0, TRACK), TRACK);
        assert_eq!(value_to_position(-10.0, -10.0, 10.0, 200.0), 0.0);
        assert_eq!(value_to_position(0.0, -10.0, 10.0, 200.0), 100.0);
    }

    #[test]
    fn round_trip_on_step_grid() {
        let (min, max, step) = (-20.0, 80.0, 2.5);
        let mut k = 0.0;
        while min + k * step <= max {
            let v = min + k * step;
            let px = value_to_position(v, min, max, TRACK);
            assert_eq!(
                position_to_value(px, CONTAINER, THUMB, min, max, step),
                v,
                "round trip failed for {v}"
            );
            k += 1.0;
        }
    }

    #[test]
    fn round_trip_on_decimal_step_grid() {
        let tenths = [0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0];
        for v in tenths {
            let px = value_to_position(v, 0.0, 1.0, TRACK);
            assert_eq!(
                position_to_value(px, CONTAINER, THUMB, 0.0, 1.0, 0.1),
                v,
                "round trip failed for {v}"
            );
        }

        for k in 0..=100 {
            let v = f64::from(k) / 100.0;
            let px = value_to_position(v, 0.0, 1.0, TRACK);
            assert_eq!(
                position_to_value(px, CONTAINER, THUMB, 0.0, 1.0, 0.01),
                v,
                "round trip failed for {v}"
            );
        }

        // Offset grid: -0.25, -0.2, ..., 0.25.
        for v in [-0.25, -0.1, 0.05, 0.15, 0.25] {
            let px = value_to_position(v, -0.25, 0.25, TRACK);
            assert_eq!(
                position_to_value(px, CONTAINER, THUMB, -0.25, 0.25, 0.05),
                v,
                "round trip failed for {v}"
            );
        }
    }

    #[test]
    fn decimal_places_of_short_decimals() {
        assert_eq!(decimal_places(0.0), Some(0));
        assert_eq!(decimal_places(5.0), Some(0));
        assert_eq!(decimal_places(2.5), Some(1));
        assert_eq!(decimal_places(0.1), Some(1));
        assert_eq!(decimal_places(-0.25), Some(2));
        assert_eq!(decimal_places(0.001), Some(3));
        assert_eq!(decimal_places(1.0 / 3.0), None);
        assert_eq!(decimal_places(f64::NAN), None);
    }

    #[test]
    fn snap_decimal_returns_literal_values() {
        assert_eq!(snap_decimal(0.1 + 0.2, 1), 0.3);
        assert_eq!(snap_decimal(7.0 * 0.1, 1), 0.7);
        assert_eq!(snap_decimal(1e300, 2), 1e300);
    }

    #[test]
    fn non_decimal_step_is_not_snapped() {
        let third = 1.0 / 3.0;
        let px = value_to_position(third, 0.0, 1.0, TRACK);
        let value = position_to_value(px, CONTAINER, THUMB, 0.0, 1.0, third);
        assert!((value - third).abs() < 1e-12, "unexpected value {value}");
    }

    #[test]
    fn position_to_value_rounds_to_nearest_step() {
        // 10px per unit of value, step 2.
        let (container, thumb) = (110.0, 10.0);
        assert_eq!(position_to_value(29.0, container, thumb, 0.0, 10.0, 2.0), 2.0);
        assert_eq!(position_to_value(31.0, container, thumb, 0.0, 10.0, 2.0), 4.0);
        assert_eq!(position_to_value(49.0, container, thumb, 0.0, 10.0, 2.0), 4.0);
        assert_eq!(position_to_value(51.0, container, thumb, 0.0, 10.0, 2.0), 6.0);
    }

    #[test]
    fn exact_half_step_goes_to_higher_value() {
        // Raw value 7 sits halfway between 6 and 8.
        assert_eq!(position_to_value(70.0, 110.0, 10.0, 0.0, 10.0, 2.0), 8.0);
        // Raw value 1 sits halfway between 0 and 2.
        assert_eq!(position_to_value(10.0, 110.0, 10.0, 0.0, 10.0, 2.0), 2.0);
    }

    #[test]
    fn quantization_is_relative_to_min() {
        // Grid is 3, 8, 13, ...
        let (container, thumb) = (110.0, 10.0);
        assert_eq!(position_to_value(0.0, container, thumb, 3.0, 13.0, 5.0), 3.0);
        assert_eq!(position_to_value(40.0, container, thumb, 3.0, 13.0, 5.0), 8.0);
        assert_eq!(position_to_value(60.0, container, thumb, 3.0, 13.0, 5.0), 8.0);
    }

    #[test]
    fn out_of_track_positions_clamp_to_domain() {
        assert_eq!(position_to_value(-50.0, CONTAINER, THUMB, 0.0, 100.0, 1.0), 0.0);
        assert_eq!(position_to_value(1e6, CONTAINER, THUMB, 0.0, 100.0, 1.0), 100.0);
    }

    #[test]
    fn mapping_is_monotonic() {
        let mut last_px = f64::NEG_INFINITY;
        let mut last_value = f64::NEG_INFINITY;
        let mut px = -20.0;
        while px <= CONTAINER + 20.0 {
            let value = position_to_value(px, CONTAINER, THUMB, 0.0, 100.0, 3.0);
            assert!(value >= last_value, "value decreased at {px}px");
            last_value = value;

            let pos = value_to_position(px, 0.0, 100.0, TRACK);
            assert!(pos >= last_px, "position decreased at {px}");
            last_px = pos;

            px += 0.75;
        }
    }
}
