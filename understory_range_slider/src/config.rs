// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider configuration and its validation.

use core::fmt;

/// Number of thumbs a slider exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SliderMode {
    /// One thumb selecting a single value.
    ///
    /// The high bound is pinned to `max` and only reported, never dragged.
    Single,
    /// Two thumbs selecting a contiguous sub-range.
    #[default]
    Range,
}

/// Error returned when a [`SliderConfig`] violates its construction contract.
///
/// Invalid configuration is never corrected silently; callers get one of these
/// instead so that integration bugs surface early.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// `min` is not strictly less than `max`.
    EmptyDomain {
        /// Requested lower domain bound.
        min: f64,
        /// Requested upper domain bound.
        max: f64,
    },
    /// `step` is not strictly positive.
    InvalidStep(f64),
    /// `min_range` lies outside `[0, max - min]`.
    InvalidMinRange {
        /// Requested minimum separation.
        min_range: f64,
        /// Width of the domain, `max - min`.
        span: f64,
    },
    /// One of the numeric options is NaN or infinite.
    NonFinite,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDomain { min, max } => {
                write!(f, "slider domain is empty: min {min} must be less than max {max}")
            }
            Self::InvalidStep(step) => write!(f, "slider step {step} must be positive"),
            Self::InvalidMinRange { min_range, span } => write!(
                f,
                "slider min_range {min_range} must lie within [0, {span}]"
            ),
            Self::NonFinite => f.write_str("slider configuration contains a non-finite number"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Immutable slider configuration.
///
/// Built through [`SliderConfig::new`] (or [`SliderConfig::single`] /
/// [`SliderConfig::range`]), which validates:
///
/// - `min < max`
/// - `step > 0`
/// - `0 <= min_range <= max - min`
///
/// ```
/// use understory_range_slider::{SliderConfig, SliderMode};
///
/// let config = SliderConfig::range(0.0, 100.0, 1.0)
///     .and_then(|c| c.with_min_range(5.0))
///     .unwrap();
/// assert_eq!(config.mode(), SliderMode::Range);
/// assert_eq!(config.min_range(), 5.0);
///
/// assert!(SliderConfig::range(10.0, 10.0, 1.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderConfig {
    mode: SliderMode,
    min: f64,
    max: f64,
    step: f64,
    min_range: f64,
    disabled: bool,
    dark_mode: bool,
}

impl SliderConfig {
    /// Creates a validated configuration with `min_range = 0`, enabled.
    pub fn new(mode: SliderMode, min: f64, max: f64, step: f64) -> Result<Self, ConfigError> {
        let config = Self {
            mode,
            min,
            max,
            step,
            min_range: 0.0,
            disabled: false,
            dark_mode: false,
        };
        config.validate()?;
        Ok(config)
    }

    /// Shorthand for a [`SliderMode::Single`] configuration.
    pub fn single(min: f64, max: f64, step: f64) -> Result<Self, ConfigError> {
        Self::new(SliderMode::Single, min, max, step)
    }

    /// Shorthand for a [`SliderMode::Range`] configuration.
    pub fn range(min: f64, max: f64, step: f64) -> Result<Self, ConfigError> {
        Self::new(SliderMode::Range, min, max, step)
    }

    /// Returns a copy with the given minimum low/high separation.
    pub fn with_min_range(self, min_range: f64) -> Result<Self, ConfigError> {
        let config = Self { min_range, ..self };
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy with gesture processing enabled or suppressed.
    #[must_use]
    pub fn with_disabled(self, disabled: bool) -> Self {
        Self { disabled, ..self }
    }

    /// Returns a copy with the presentational dark-mode flag set.
    #[must_use]
    pub fn with_dark_mode(self, dark_mode: bool) -> Self {
        Self { dark_mode, ..self }
    }

    /// Number of thumbs.
    #[must_use]
    pub fn mode(&self) -> SliderMode {
        self.mode
    }

    /// Lower domain bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper domain bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Quantization granularity.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Minimum low/high separation in [`SliderMode::Range`].
    #[must_use]
    pub fn min_range(&self) -> f64 {
        self.min_range
    }

    /// Whether gesture processing is suppressed.
    #[must_use]
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Presentational flag; never consulted by the interaction engine.
    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Width of the domain, `max - min`.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub(crate) fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min.is_finite()
            && self.max.is_finite()
            && self.step.is_finite()
            && self.min_range.is_finite())
        {
            return Err(ConfigError::NonFinite);
        }
        if self.min >= self.max {
            return Err(ConfigError::EmptyDomain {
                min: self.min,
                max: self.max,
            });
        }
        if self.step <= 0.0 {
            return Err(ConfigError::InvalidStep(self.step));
        }
        let span = self.span();
        if self.min_range < 0.0 || self.min_range > span {
            return Err(ConfigError::InvalidMinRange {
                min_range: self.min_range,
                span,
            });
        }
        Ok(())
    }
}
