// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture controller: turns pointer events into committed slider values.
//!
//! ## Usage
//!
//! 1) Create a [`GestureController`] from a validated [`SliderConfig`].
//! 2) Feed layout results into [`GestureController::set_metrics`] whenever the
//!    container or thumb is (re)measured.
//! 3) Route every pointer event through [`GestureController::handle_event`]
//!    (or the `pointer_*` shorthands). Each committed change is returned and
//!    also delivered to the listener registered with
//!    [`GestureController::set_on_change`].
//! 4) Read [`GestureController::thumb_offsets`] and
//!    [`GestureController::selected_rail`] when painting.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_range_slider::{ContainerMetrics, GestureController, SliderConfig};
//!
//! let config = SliderConfig::range(0.0, 100.0, 1.0).unwrap();
//! let mut slider = GestureController::new(config);
//! // 330px container, 30px thumbs: 3px per unit of value.
//! slider.set_metrics(ContainerMetrics::new(330.0, 30.0));
//!
//! // Touch at the center of the high thumb (value 100), then drag it to 50.
//! slider.pointer_down(Point::new(315.0, 10.0), Point::new(331.0, 10.0), 1);
//! let change = slider.pointer_move(Point::new(16.0 + 165.0, 10.0), 1).unwrap();
//! assert_eq!((change.low, change.high), (0.0, 50.0));
//!
//! slider.pointer_up();
//! assert!(!slider.is_dragging());
//! ```

use alloc::boxed::Box;
use core::fmt;

use kurbo::Point;

use crate::config::{SliderConfig, SliderMode};
use crate::constraint::{Thumb, constrain, constrain_pair};
use crate::mapper::{ContainerMetrics, position_to_value, value_to_position};
use crate::rail::{SelectedRailBounds, project_rail};
use crate::selector::select_thumb;

/// Committed slider values.
///
/// Invariant: `min <= low <= high <= max`; in [`SliderMode::Range`]
/// `high - low >= min_range`; in [`SliderMode::Single`] `high == max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderState {
    /// Lower bound, or the selected value in [`SliderMode::Single`].
    pub low: f64,
    /// Upper bound; pinned to `max` in [`SliderMode::Single`].
    pub high: f64,
}

impl SliderState {
    /// Value currently held by `thumb`.
    #[must_use]
    pub fn value(&self, thumb: Thumb) -> f64 {
        match thumb {
            Thumb::Low => self.low,
            Thumb::High => self.high,
        }
    }

    fn set(&mut self, thumb: Thumb, value: f64) {
        match thumb {
            Thumb::Low => self.low = value,
            Thumb::High => self.high = value,
        }
    }
}

/// Bookkeeping for one drag, from touch-down to release or interruption.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    /// Thumb chosen at touch-down; fixed for the whole drag.
    pub thumb: Thumb,
    /// Absolute position of the container's left edge, `page.x - local.x` at
    /// touch-down. Move events subtract it to get back into container space.
    pub origin_px: f64,
    /// Last value committed by this drag (or the thumb's value at touch-down).
    pub last_value: f64,
    /// Container-space center of the thumb at `last_value`.
    pub last_position_px: f64,
}

/// Raw pointer input consumed by [`GestureController::handle_event`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// A touch or button press landed on the slider.
    Down {
        /// Position relative to the slider container.
        local: Point,
        /// Absolute position, in the frame move events use.
        page: Point,
        /// Number of touch points currently active.
        touches: usize,
    },
    /// The pointer moved while pressed.
    Move {
        /// Absolute position.
        page: Point,
        /// Number of touch points currently active.
        touches: usize,
    },
    /// The pointer was released.
    Up,
    /// The platform reclaimed or interrupted the gesture.
    Cancel,
}

/// A committed value change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderChange {
    /// New lower bound (or single value).
    pub low: f64,
    /// New upper bound; `max` in [`SliderMode::Single`].
    pub high: f64,
    /// Thumb dragged to produce the change, `None` for caller overwrites and
    /// reconfiguration.
    pub thumb: Option<Thumb>,
}

/// Left-edge offsets of the thumbs inside the container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThumbOffsets {
    /// Offset of the low (or single) thumb.
    pub low: f64,
    /// Offset of the high thumb; `None` in [`SliderMode::Single`].
    pub high: Option<f64>,
}

/// Listener invoked with `(low, high)` after every committed change.
type ChangeListener = Box<dyn FnMut(f64, f64)>;

/// Drag state machine for a single or dual thumb slider.
///
/// The controller is `Idle` until an accepted touch-down creates a
/// [`GestureSession`]; it is `Dragging` while the session exists. Only the
/// controller mutates [`SliderState`].
pub struct GestureController {
    config: SliderConfig,
    state: SliderState,
    metrics: ContainerMetrics,
    session: Option<GestureSession>,
    pending: Option<SliderState>,
    rail: Option<SelectedRailBounds>,
    on_change: Option<ChangeListener>,
}

impl fmt::Debug for GestureController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureController")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("metrics", &self.metrics)
            .field("session", &self.session)
            .field("pending", &self.pending)
            .field("rail", &self.rail)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl GestureController {
    /// Creates an idle controller spanning the whole domain (`low = min`,
    /// `high = max`) with unmeasured metrics.
    #[must_use]
    pub fn new(config: SliderConfig) -> Self {
        Self::with_values(config, config.min(), config.max())
    }

    /// Creates an idle controller with initial values, clamped into the
    /// invariants.
    #[must_use]
    pub fn with_values(config: SliderConfig, low: f64, high: f64) -> Self {
        let (low, high) = constrain_pair(&config, low, high);
        Self {
            config,
            state: SliderState { low, high },
            metrics: ContainerMetrics::default(),
            session: None,
            pending: None,
            rail: None,
            on_change: None,
        }
    }

    /// Registers the listener notified after every committed change,
    /// replacing any previous one.
    pub fn set_on_change(&mut self, listener: impl FnMut(f64, f64) + 'static) {
        self.on_change = Some(Box::new(listener));
    }

    /// Removes the change listener.
    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Committed values.
    #[must_use]
    pub fn state(&self) -> SliderState {
        self.state
    }

    /// Last metrics reported by layout.
    #[must_use]
    pub fn metrics(&self) -> ContainerMetrics {
        self.metrics
    }

    /// Active drag, if any.
    #[must_use]
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Selected rail segment, once metrics are measured.
    #[must_use]
    pub fn selected_rail(&self) -> Option<SelectedRailBounds> {
        self.rail
    }

    /// Thumb offsets for painting, once metrics are measured.
    #[must_use]
    pub fn thumb_offsets(&self) -> Option<ThumbOffsets> {
        if !self.metrics.is_measured() {
            return None;
        }
        let high = match self.config.mode() {
            SliderMode::Range => Some(self.offset_of(self.state.high)),
            SliderMode::Single => None,
        };
        Some(ThumbOffsets {
            low: self.offset_of(self.state.low),
            high,
        })
    }

    /// Records new layout measurements and re-projects the rail.
    ///
    /// Never notifies the change listener: values do not change with layout.
    pub fn set_metrics(&mut self, metrics: ContainerMetrics) {
        if self.metrics == metrics {
            return;
        }
        self.metrics = metrics;
        self.reproject();
    }

    /// Overwrites the values from outside a gesture.
    ///
    /// The pair is clamped through the constraint engine. While a drag is in
    /// progress the overwrite is deferred until the controller is idle again;
    /// a later overwrite replaces an earlier deferred one.
    pub fn set_values(&mut self, low: f64, high: f64) -> Option<SliderChange> {
        if self.session.is_some() {
            log::debug!("deferring slider overwrite ({low}, {high}) until the drag ends");
            self.pending = Some(SliderState { low, high });
            return None;
        }
        self.apply_values(low, high)
    }

    /// Replaces the configuration.
    ///
    /// Any drag in progress is dropped, then the current (or deferred) values
    /// are re-clamped against the new configuration.
    pub fn set_config(&mut self, config: SliderConfig) -> Option<SliderChange> {
        if self.session.take().is_some() {
            log::debug!("slider reconfigured mid-drag; session dropped");
        }
        self.config = config;
        let SliderState { low, high } = self.pending.take().unwrap_or(self.state);
        let change = self.apply_values(low, high);
        self.reproject();
        change
    }

    /// Enables or suppresses gesture processing.
    ///
    /// Disabling during a drag interrupts it like [`PointerEvent::Cancel`].
    pub fn set_disabled(&mut self, disabled: bool) -> Option<SliderChange> {
        self.config.set_disabled(disabled);
        if disabled { self.end_session() } else { None }
    }

    /// Dispatches one pointer event through the state machine.
    pub fn handle_event(&mut self, event: PointerEvent) -> Option<SliderChange> {
        match event {
            PointerEvent::Down {
                local,
                page,
                touches,
            } => self.pointer_down(local, page, touches),
            PointerEvent::Move { page, touches } => self.pointer_move(page, touches),
            PointerEvent::Up => self.pointer_up(),
            PointerEvent::Cancel => self.cancel(),
        }
    }

    /// Handles a touch-down at `local` (container space) / `page` (absolute).
    ///
    /// Ignored while disabled, with other than exactly one touch, or before
    /// metrics are measured. A second finger also ends a drag in progress.
    /// An accepted touch-down immediately moves the chosen thumb to the
    /// touched position, so a tap relocates it without any drag.
    pub fn pointer_down(
        &mut self,
        local: Point,
        page: Point,
        touches: usize,
    ) -> Option<SliderChange> {
        if touches != 1 {
            log::trace!("slider ignoring touch-down with {touches} touch points");
            return if touches > 1 { self.end_session() } else { None };
        }
        if self.config.disabled() {
            log::trace!("slider disabled; touch-down ignored");
            return None;
        }
        if !self.metrics.is_measured() {
            log::trace!("slider not measured yet; touch-down ignored");
            return None;
        }
        if !(local.x.is_finite() && page.x.is_finite()) {
            log::trace!("slider ignoring non-finite touch-down");
            return None;
        }
        if self.session.is_some() {
            log::debug!("slider touch-down while dragging; restarting session");
            self.session = None;
        }

        let half_thumb = self.metrics.thumb_width_px * 0.5;
        let low_center = self.offset_of(self.state.low) + half_thumb;
        let high_center = self.offset_of(self.state.high) + half_thumb;
        let thumb = select_thumb(self.config.mode(), local.x, low_center, high_center);
        let last_value = self.state.value(thumb);
        self.session = Some(GestureSession {
            thumb,
            origin_px: page.x - local.x,
            last_value,
            last_position_px: self.offset_of(last_value) + half_thumb,
        });
        log::debug!("slider drag started on {thumb:?} thumb at {}px", local.x);

        self.apply_pointer(local.x)
    }

    /// Handles a pointer move to the absolute position `page`.
    ///
    /// A move reporting more than one touch point interrupts the drag.
    pub fn pointer_move(&mut self, page: Point, touches: usize) -> Option<SliderChange> {
        let origin_px = self.session.as_ref()?.origin_px;
        if touches > 1 {
            log::debug!("second touch point during slider drag; interrupting");
            return self.end_session();
        }
        if !page.x.is_finite() {
            log::trace!("slider ignoring non-finite move");
            return None;
        }
        self.apply_pointer(page.x - origin_px)
    }

    /// Handles pointer release, ending the drag.
    ///
    /// Returns the change produced by a deferred overwrite, if one was waiting.
    pub fn pointer_up(&mut self) -> Option<SliderChange> {
        self.end_session()
    }

    /// Handles an interrupted gesture. The last committed values stay; there
    /// is no rollback.
    pub fn cancel(&mut self) -> Option<SliderChange> {
        self.end_session()
    }

    fn end_session(&mut self) -> Option<SliderChange> {
        let session = self.session.take()?;
        log::debug!(
            "slider drag on {:?} thumb ended at {}",
            session.thumb,
            session.last_value
        );
        let SliderState { low, high } = self.pending.take()?;
        self.apply_values(low, high)
    }

    /// Moves the session's thumb toward the container-space pointer `x`.
    fn apply_pointer(&mut self, x: f64) -> Option<SliderChange> {
        if !self.metrics.is_measured() {
            return None;
        }
        let session = self.session?;
        let half_thumb = self.metrics.thumb_width_px * 0.5;
        let candidate = position_to_value(
            x - half_thumb,
            self.metrics.container_width_px,
            self.metrics.thumb_width_px,
            self.config.min(),
            self.config.max(),
            self.config.step(),
        );
        let value = constrain(
            &self.config,
            session.thumb,
            candidate,
            self.state.low,
            self.state.high,
        );
        if value == session.last_value {
            log::trace!("slider move maps to {value} again; skipped");
            return None;
        }

        self.session = Some(GestureSession {
            last_value: value,
            last_position_px: self.offset_of(value) + half_thumb,
            ..session
        });
        self.state.set(session.thumb, value);
        self.reproject();
        Some(self.notify(Some(session.thumb)))
    }

    fn apply_values(&mut self, low: f64, high: f64) -> Option<SliderChange> {
        let (low, high) = constrain_pair(&self.config, low, high);
        let next = SliderState { low, high };
        if next == self.state {
            return None;
        }
        log::debug!("slider values overwritten to ({low}, {high})");
        self.state = next;
        self.reproject();
        Some(self.notify(None))
    }

    fn notify(&mut self, thumb: Option<Thumb>) -> SliderChange {
        let SliderState { low, high } = self.state;
        if let Some(listener) = self.on_change.as_mut() {
            listener(low, high);
        }
        SliderChange { low, high, thumb }
    }

    fn reproject(&mut self) {
        self.rail = self.metrics.is_measured().then(|| {
            project_rail(
                self.config.mode(),
                self.state.low,
                self.state.high,
                self.config.min(),
                self.config.max(),
                self.metrics.track_width_px(),
            )
        });
    }

    fn offset_of(&self, value: f64) -> f64 {
        value_to_position(
            value,
            self.config.min(),
            self.config.max(),
            self.metrics.track_width_px(),
        )
    }
}
