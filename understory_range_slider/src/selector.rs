// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decides which thumb a touch-down grabs.

use crate::config::SliderMode;
use crate::constraint::Thumb;

/// Picks the thumb a gesture starting at `down_x` controls.
///
/// All positions are pixel centers in the same frame as `down_x`.
///
/// - [`SliderMode::Single`] always yields [`Thumb::Low`].
/// - [`SliderMode::Range`] yields the thumb whose center is closer; a touch
///   exactly halfway between two distinct thumbs yields [`Thumb::Low`].
/// - When both thumbs sit on the same pixel, the side of the touch decides:
///   at or left of the shared center grabs [`Thumb::Low`], right of it grabs
///   [`Thumb::High`], so that stacked thumbs can always be pulled apart.
///
/// ```
/// use understory_range_slider::{SliderMode, Thumb, selector::select_thumb};
///
/// assert_eq!(select_thumb(SliderMode::Range, 90.0, 60.0, 200.0), Thumb::Low);
/// assert_eq!(select_thumb(SliderMode::Range, 170.0, 60.0, 200.0), Thumb::High);
/// assert_eq!(select_thumb(SliderMode::Range, 130.0, 60.0, 200.0), Thumb::Low);
/// ```
#[must_use]
pub fn select_thumb(mode: SliderMode, down_x: f64, low_center: f64, high_center: f64) -> Thumb {
    if mode == SliderMode::Single {
        return Thumb::Low;
    }
    if low_center == high_center {
        return if down_x > low_center {
            Thumb::High
        } else {
            Thumb::Low
        };
    }
    let from_low = (down_x - low_center).abs();
    let from_high = (down_x - high_center).abs();
    if from_high < from_low {
        Thumb::High
    } else {
        Thumb::Low
    }
}
