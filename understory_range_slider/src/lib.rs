// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Range Slider: headless interaction engine for single and dual
//! thumb sliders.
//!
//! Given a domain `[min, max]` and a quantization `step`, the engine lets a
//! pointer drag one thumb (single value) or two thumbs (a contiguous
//! sub-range kept at least `min_range` apart) along a horizontal track.
//!
//! The crate is split along the pieces of that interaction:
//!
//! - [`mapper`]: pure conversion between track pixel offsets and domain values,
//!   with step quantization and domain clamping.
//! - [`constraint`]: the interval each thumb may occupy given the other one.
//! - [`selector`]: which thumb a touch-down grabs.
//! - [`rail`]: the highlighted segment between the active bounds.
//! - [`GestureController`]: the `Idle`/`Dragging` state machine tying these
//!   together and reporting committed changes.
//!
//! It does **not** paint, measure layout, animate, or own an event loop.
//! Callers are expected to:
//! - Report container and thumb widths through
//!   [`GestureController::set_metrics`] whenever layout runs.
//! - Forward pointer input as [`PointerEvent`]s.
//! - Paint thumbs at [`GestureController::thumb_offsets`] and the selected
//!   rail at [`GestureController::selected_rail`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_range_slider::{
//!     ContainerMetrics, GestureController, PointerEvent, SliderConfig,
//! };
//!
//! let config = SliderConfig::range(0.0, 100.0, 1.0)
//!     .and_then(|c| c.with_min_range(5.0))
//!     .unwrap();
//! let mut slider = GestureController::with_values(config, 20.0, 80.0);
//! slider.set_on_change(|low, high| println!("{low}..{high}"));
//! slider.set_metrics(ContainerMetrics::new(330.0, 30.0));
//!
//! // Grab the high thumb (center at 255px) and pull it toward value 22.
//! slider.handle_event(PointerEvent::Down {
//!     local: Point::new(255.0, 12.0),
//!     page: Point::new(271.0, 412.0),
//!     touches: 1,
//! });
//! let change = slider
//!     .handle_event(PointerEvent::Move {
//!         page: Point::new(97.0, 412.0),
//!         touches: 1,
//!     })
//!     .unwrap();
//! // Held at low + min_range.
//! assert_eq!((change.low, change.high), (20.0, 25.0));
//! slider.handle_event(PointerEvent::Up);
//! ```
//!
//! ## Features
//!
//! - `std` (default): use the standard library for float math.
//! - `libm`: use `libm` through Kurbo for `no_std` builds.
//!
//! Diagnostics go through the [`log`] facade at `debug` and `trace` levels.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
pub mod constraint;
mod controller;
pub mod mapper;
pub mod rail;
pub mod selector;

pub use config::{ConfigError, SliderConfig, SliderMode};
pub use constraint::Thumb;
pub use controller::{
    GestureController, GestureSession, PointerEvent, SliderChange, SliderState, ThumbOffsets,
};
pub use mapper::ContainerMetrics;
pub use rail::SelectedRailBounds;
