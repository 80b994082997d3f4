// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Helpers shared by the range slider demos.
//!
//! Demos script pointer input in container coordinates and print the paint
//! geometry a renderer would draw, without any window or GPU.

use kurbo::Point;
use understory_range_slider::{GestureController, PointerEvent};

/// Builds single-touch [`PointerEvent`]s for a container placed at `origin`
/// in page space.
#[derive(Clone, Copy, Debug)]
pub struct ScriptedPointer {
    origin: Point,
}

impl ScriptedPointer {
    /// Pointer for a container whose top-left corner sits at `origin`.
    pub fn new(origin: Point) -> Self {
        Self { origin }
    }

    /// Touch-down at container-space `(x, y)`.
    pub fn down(&self, x: f64, y: f64) -> PointerEvent {
        let local = Point::new(x, y);
        PointerEvent::Down {
            local,
            page: local + self.origin.to_vec2(),
            touches: 1,
        }
    }

    /// Move to container-space `(x, y)`.
    pub fn move_to(&self, x: f64, y: f64) -> PointerEvent {
        PointerEvent::Move {
            page: Point::new(x, y) + self.origin.to_vec2(),
            touches: 1,
        }
    }
}

/// One line describing where the thumbs and the selected rail would be
/// painted, or `None` before layout has been reported.
pub fn describe_paint(slider: &GestureController) -> Option<String> {
    let thumbs = slider.thumb_offsets()?;
    let rail = slider.selected_rail()?;
    Some(format!(
        "thumbs at {:.1}px / {:.1}px, rail {:.1}px..{:.1}px",
        thumbs.low,
        thumbs.high.unwrap_or(thumbs.low),
        rail.start_px,
        rail.end_px()
    ))
}
