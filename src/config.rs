//! Gauge configuration with validated construction.

use crate::colors::from_argb;
use palette::Srgba;

/// Smallest scale the gauge will render; lower values are coerced up.
pub const MIN_MAX_SPEED: u16 = 40;

/// Smallest labeled-tick spacing; keeps the minor-tick increment
/// (`tick_step / 10`) at one or more.
pub const MIN_TICK_STEP: u16 = 10;

/// Immutable gauge configuration.
///
/// Built once via [`GaugeConfig::builder`] and fixed for the gauge's
/// lifetime. All range constraints are enforced by coercion at build time,
/// so a constructed config is always internally consistent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeConfig {
    /// Top of the scale. At least [`MIN_MAX_SPEED`].
    pub max_speed: u16,

    /// Speed shown before the first transition. Within `0..=max_speed`.
    pub initial_speed: u16,

    /// Spacing, in speed units, between labeled ticks. The minor-tick
    /// increment is `tick_step / 10`.
    pub tick_step: u16,

    /// Gauge disc background.
    pub fill_color: Srgba,

    /// Digital-speed panel background.
    pub panel_fill_color: Srgba,

    /// Tick marks.
    pub scale_color: Srgba,

    /// Numeric labels around the scale.
    pub scale_text_color: Srgba,

    /// Digital readout inside the panel.
    pub speed_text_color: Srgba,

    /// Needle hinge fill.
    pub hinge_color: Srgba,

    /// Time to animate across the entire scale. Partial sweeps take
    /// proportionally less.
    pub full_sweep_duration_ms: u64,
}

impl GaugeConfig {
    /// Creates a builder seeded with the default configuration.
    pub fn builder() -> GaugeConfigBuilder {
        GaugeConfigBuilder::new()
    }
}

impl Default for GaugeConfig {
    fn default() -> Self {
        GaugeConfigBuilder::new().build()
    }
}

/// Builder for [`GaugeConfig`].
///
/// Out-of-range values are coerced rather than rejected: `max_speed` is
/// raised to [`MIN_MAX_SPEED`], `initial_speed` is clamped into range and
/// `tick_step` is raised to [`MIN_TICK_STEP`]. `build` therefore always
/// succeeds.
#[derive(Debug, Clone)]
pub struct GaugeConfigBuilder {
    max_speed: u16,
    initial_speed: u16,
    tick_step: u16,
    fill_color: Srgba,
    panel_fill_color: Srgba,
    scale_color: Srgba,
    scale_text_color: Srgba,
    speed_text_color: Srgba,
    hinge_color: Srgba,
    full_sweep_duration_ms: u64,
}

impl GaugeConfigBuilder {
    /// Creates a builder with the default configuration.
    pub fn new() -> Self {
        Self {
            max_speed: 180,
            initial_speed: 0,
            tick_step: 20,
            fill_color: from_argb(0xFF44_4444),
            panel_fill_color: from_argb(0xFFCC_CCCC),
            scale_color: from_argb(0xFFFF_FFFF),
            scale_text_color: from_argb(0xFFFF_FFFF),
            speed_text_color: from_argb(0xFF00_0000),
            hinge_color: from_argb(0xFFFF_0000),
            full_sweep_duration_ms: 10_000,
        }
    }

    /// Sets the top of the scale.
    pub fn max_speed(mut self, max_speed: u16) -> Self {
        self.max_speed = max_speed;
        self
    }

    /// Sets the speed shown before the first transition.
    pub fn initial_speed(mut self, initial_speed: u16) -> Self {
        self.initial_speed = initial_speed;
        self
    }

    /// Sets the labeled-tick spacing.
    pub fn tick_step(mut self, tick_step: u16) -> Self {
        self.tick_step = tick_step;
        self
    }

    /// Sets the gauge disc background color.
    pub fn fill_color(mut self, color: Srgba) -> Self {
        self.fill_color = color;
        self
    }

    /// Sets the digital-speed panel background color.
    pub fn panel_fill_color(mut self, color: Srgba) -> Self {
        self.panel_fill_color = color;
        self
    }

    /// Sets the tick-mark color.
    pub fn scale_color(mut self, color: Srgba) -> Self {
        self.scale_color = color;
        self
    }

    /// Sets the scale-label text color.
    pub fn scale_text_color(mut self, color: Srgba) -> Self {
        self.scale_text_color = color;
        self
    }

    /// Sets the digital-readout text color.
    pub fn speed_text_color(mut self, color: Srgba) -> Self {
        self.speed_text_color = color;
        self
    }

    /// Sets the needle hinge fill color.
    pub fn hinge_color(mut self, color: Srgba) -> Self {
        self.hinge_color = color;
        self
    }

    /// Sets the full-scale animation duration in milliseconds.
    pub fn full_sweep_duration_ms(mut self, duration_ms: u64) -> Self {
        self.full_sweep_duration_ms = duration_ms;
        self
    }

    /// Builds the configuration, coercing out-of-range values.
    pub fn build(self) -> GaugeConfig {
        let max_speed = self.max_speed.max(MIN_MAX_SPEED);
        GaugeConfig {
            max_speed,
            initial_speed: self.initial_speed.min(max_speed),
            tick_step: self.tick_step.max(MIN_TICK_STEP),
            fill_color: self.fill_color,
            panel_fill_color: self.panel_fill_color,
            scale_color: self.scale_color,
            scale_text_color: self.scale_text_color,
            speed_text_color: self.speed_text_color,
            hinge_color: self.hinge_color,
            full_sweep_duration_ms: self.full_sweep_duration_ms,
        }
    }
}

impl Default for GaugeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
