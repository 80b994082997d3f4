// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives a range slider with a scripted drag and prints what a renderer
//! would paint after every committed change.

use kurbo::Point;
use understory_demos::{ScriptedPointer, describe_paint};
use understory_range_slider::{ContainerMetrics, GestureController, PointerEvent, SliderConfig};

fn main() {
    let config = SliderConfig::range(0.0, 100.0, 1.0)
        .and_then(|c| c.with_min_range(5.0))
        .unwrap_or_else(|err| panic!("invalid slider config: {err}"));
    let mut slider = GestureController::new(config);
    slider.set_on_change(|low, high| println!("onChange({low}, {high})"));

    // Layout reports the container first, then the thumb.
    slider.set_metrics(ContainerMetrics::new(343.0, 0.0));
    slider.set_metrics(ContainerMetrics::new(343.0, 30.0));

    let pointer = ScriptedPointer::new(Point::new(16.0, 225.0));
    let script = [
        pointer.down(300.0, 15.0),
        pointer.move_to(250.0, 15.0),
        pointer.move_to(120.0, 16.0),
        pointer.move_to(10.0, 16.0),
        PointerEvent::Up,
    ];

    for event in script {
        if slider.handle_event(event).is_some() {
            if let Some(line) = describe_paint(&slider) {
                println!("  {line}");
            }
        }
    }
}
