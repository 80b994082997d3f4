// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keeps thumbs inside the domain and at least `min_range` apart.

use core::ops::RangeInclusive;

use crate::config::{SliderConfig, SliderMode};
use crate::mapper::{decimal_places, snap_decimal};

/// Identifies one of the two thumbs.
///
/// In [`SliderMode::Single`] the only thumb is [`Thumb::Low`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Thumb {
    /// Thumb for the lower bound (or the single value).
    #[default]
    Low,
    /// Thumb for the upper bound; only present in [`SliderMode::Range`].
    High,
}

/// Clamps without panicking when `lo > hi`; `hi` wins in that case.
pub(crate) fn clamp_between(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}

/// Decimal places shared by the configured grid, if it is a decimal one.
fn grid_places(config: &SliderConfig) -> Option<u32> {
    let min = decimal_places(config.min())?;
    let step = decimal_places(config.step())?;
    let min_range = decimal_places(config.min_range())?;
    Some(min.max(step).max(min_range))
}

/// Largest value `<= high - min_range` (not below `floor`) whose distance to
/// `high` is still at least `min_range` once evaluated in `f64`.
fn cap_below(config: &SliderConfig, high: f64, floor: f64) -> f64 {
    let min_range = config.min_range();
    let mut bound = high - min_range;
    if let Some(places) = grid_places(config) {
        bound = snap_decimal(bound, places);
    }
    while bound > floor && high - bound < min_range {
        bound = bound.next_down();
    }
    bound.max(floor)
}

/// Smallest value `>= low + min_range` (not above `ceiling`) whose distance
/// from `low` is still at least `min_range` once evaluated in `f64`.
fn floor_above(config: &SliderConfig, low: f64, ceiling: f64) -> f64 {
    let min_range = config.min_range();
    let mut bound = low + min_range;
    if let Some(places) = grid_places(config) {
        bound = snap_decimal(bound, places);
    }
    while bound < ceiling && bound - low < min_range {
        bound = bound.next_up();
    }
    bound.min(ceiling)
}

/// Returns the interval a thumb may occupy given the counterpart's value.
///
/// - [`Thumb::Low`]: `[min, high - min_range]`
/// - [`Thumb::High`]: `[low + min_range, max]`
/// - [`SliderMode::Single`]: `[min, max]`, there is no counterpart.
///
/// The bound derived from the counterpart never crosses the domain, so the
/// interval is never inverted for a state that already lies inside it. It is
/// nudged by an ulp where needed so that `high - low >= min_range` holds in
/// `f64` arithmetic, not just on paper.
#[must_use]
pub fn allowed_interval(
    config: &SliderConfig,
    thumb: Thumb,
    low: f64,
    high: f64,
) -> RangeInclusive<f64> {
    let (min, max) = (config.min(), config.max());
    if config.mode() == SliderMode::Single {
        return min..=max;
    }
    match thumb {
        Thumb::Low => min..=cap_below(config, high, min),
        Thumb::High => floor_above(config, low, max)..=max,
    }
}

/// Clamps a candidate value for `thumb` into its [`allowed_interval`].
///
/// ```
/// use understory_range_slider::{SliderConfig, Thumb, constraint::constrain};
///
/// let config = SliderConfig::range(0.0, 100.0, 1.0)
///     .and_then(|c| c.with_min_range(5.0))
///     .unwrap();
/// // Dragging the high thumb down to 22 stops at low + min_range.
/// assert_eq!(constrain(&config, Thumb::High, 22.0, 20.0, 80.0), 25.0);
/// ```
#[must_use]
pub fn constrain(config: &SliderConfig, thumb: Thumb, candidate: f64, low: f64, high: f64) -> f64 {
    let interval = allowed_interval(config, thumb, low, high);
    clamp_between(candidate, *interval.start(), *interval.end())
}

/// Brings an externally supplied `(low, high)` pair back inside the invariants.
///
/// Used for caller overwrites and reconfiguration. In [`SliderMode::Single`]
/// `high` is pinned to `max`. In [`SliderMode::Range`] `low` is settled first
/// and `high` is pushed up to keep `min_range` of separation.
#[must_use]
pub fn constrain_pair(config: &SliderConfig, low: f64, high: f64) -> (f64, f64) {
    let (min, max) = (config.min(), config.max());
    // NaN compares false everywhere; treat it as "unset" and fall back to the bounds.
    let low = if low.is_nan() { min } else { low };
    let high = if high.is_nan() { max } else { high };
    match config.mode() {
        SliderMode::Single => (clamp_between(low, min, max), max),
        SliderMode::Range => {
            let low = clamp_between(low, min, cap_below(config, max, min));
            let high = clamp_between(high, floor_above(config, low, max), max);
            (low, high)
        }
    }
}
