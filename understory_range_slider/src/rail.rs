// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Projection of the highlighted ("selected") rail segment.

use kurbo::Rect;

use crate::config::SliderMode;
use crate::constraint::clamp_between;
use crate::mapper::value_to_position;

/// Horizontal extent of the selected rail segment.
///
/// Offsets are in the rail frame: the rail is inset by half a thumb on each
/// side of the container, so `0.0` lines up with the center of a thumb resting
/// at `min`. Both ends stay within `[0, track_width_px]`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SelectedRailBounds {
    /// Left edge of the segment.
    pub start_px: f64,
    /// Width of the segment; never negative.
    pub width_px: f64,
}

impl SelectedRailBounds {
    /// Right edge of the segment.
    #[must_use]
    pub fn end_px(&self) -> f64 {
        self.start_px + self.width_px
    }

    /// Rectangle spanning the segment between `y0` and `y1`.
    #[must_use]
    pub fn to_rect(&self, y0: f64, y1: f64) -> Rect {
        Rect::new(self.start_px, y0, self.end_px(), y1)
    }
}

/// Derives the selected rail segment for the current values.
///
/// In [`SliderMode::Range`] the segment runs from `low` to `high`. In
/// [`SliderMode::Single`] it is the filled portion from `min` up to `low`;
/// `high` is not consulted.
///
/// ```
/// use understory_range_slider::{SliderMode, rail::project_rail};
///
/// let rail = project_rail(SliderMode::Range, 20.0, 80.0, 0.0, 100.0, 300.0);
/// assert_eq!(rail.start_px, 60.0);
/// assert_eq!(rail.width_px, 180.0);
/// ```
#[must_use]
pub fn project_rail(
    mode: SliderMode,
    low: f64,
    high: f64,
    min: f64,
    max: f64,
    track_width_px: f64,
) -> SelectedRailBounds {
    let (from, to) = match mode {
        SliderMode::Range => (low, high),
        SliderMode::Single => (min, low),
    };
    let start_px = clamp_between(
        value_to_position(from, min, max, track_width_px),
        0.0,
        track_width_px,
    );
    let end_px = clamp_between(
        value_to_position(to, min, max, track_width_px),
        0.0,
        track_width_px,
    );
    SelectedRailBounds {
        start_px,
        width_px: (end_px - start_px).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_segment_spans_low_to_high() {
        let rail = project_rail(SliderMode::Range, 25.0, 75.0, 0.0, 100.0, 200.0);
        assert_eq!(rail, SelectedRailBounds {
            start_px: 50.0,
            width_px: 100.0
        });
        assert_eq!(rail.end_px(), 150.0);
    }

    #[test]
    fn single_segment_fills_from_min() {
        let rail = project_rail(SliderMode::Single, 4.0, 10.0, 0.0, 10.0, 100.0);
        assert_eq!(rail.start_px, 0.0);
        assert_eq!(rail.width_px, 40.0);
    }

    #[test]
    fn touching_thumbs_give_empty_segment() {
        let rail = project_rail(SliderMode::Range, 30.0, 30.0, 0.0, 100.0, 200.0);
        assert_eq!(rail.width_px, 0.0);
        assert_eq!(rail.start_px, 60.0);
    }

    #[test]
    fn segment_stays_inside_track() {
        let rail = project_rail(SliderMode::Range, -50.0, 150.0, 0.0, 100.0, 200.0);
        assert_eq!(rail.start_px, 0.0);
        assert_eq!(rail.end_px(), 200.0);

        let rail = project_rail(SliderMode::Range, 80.0, 20.0, 0.0, 100.0, 200.0);
        assert_eq!(rail.width_px, 0.0);
    }

    #[test]
    fn rect_covers_segment() {
        let rail = SelectedRailBounds {
            start_px: 10.0,
            width_px: 30.0,
        };
        assert_eq!(rail.to_rect(-1.0, 1.0), Rect::new(10.0, -1.0, 40.0, 1.0));
    }
}
