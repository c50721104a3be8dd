//! Pure gauge geometry on the normalized unit disc.
//!
//! All functions here are stateless maps from `(speed, config numbers)` into
//! coordinates on a disc of radius 1 centered at the bottom-middle of the
//! drawing area. The renderers establish that space with a per-pass canvas
//! transform (translate to bottom-center, scale by half-width horizontally
//! and full height vertically with a sign flip), so nothing in this module
//! knows about pixels.

use core::f32::consts::PI;
use libm::{ceilf, cosf, log10f, sinf};

/// Outer radius of every tick mark.
pub const TICK_OUTER_RADIUS: f32 = 0.98;

/// Needle tip radius.
pub const NEEDLE_LENGTH: f32 = 0.93;

/// Needle hinge disc radius.
pub const HINGE_RADIUS: f32 = 0.07;

/// Radius factor of the label ring, applied to the pixel height.
pub const LABEL_RADIUS_FACTOR: f32 = 0.8;

/// Horizontal space one readout digit occupies in disc units.
const DIGIT_WIDTH: f32 = 0.072;

/// Maps a speed value onto the half-circle span `[pi, 0]`.
///
/// Returns `pi` at speed 0 and `0` at `max_speed`, decreasing linearly in
/// between. A zero `max_speed` (unreachable through a built config) pins the
/// needle at the left stop.
pub fn angle_for(speed: u16, max_speed: u16) -> f32 {
    if max_speed == 0 {
        return PI;
    }
    PI * (1.0 - f32::from(speed) / f32::from(max_speed))
}

/// Canvas rotation, in degrees, that points the needle at `speed`.
pub fn needle_rotation_degrees(speed: u16, max_speed: u16) -> f32 {
    if max_speed == 0 {
        return 90.0;
    }
    90.0 - 180.0 * f32::from(speed) / f32::from(max_speed)
}

/// Visual classification of a tick mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickTier {
    /// Every tenth tick; longest and heaviest stroke.
    Major,

    /// Every fifth tick.
    Medium,

    /// All remaining ticks.
    Minor,
}

impl TickTier {
    /// Classifies the tick at `index` along the scale.
    pub fn for_index(index: u16) -> Self {
        if index % 10 == 0 {
            TickTier::Major
        } else if index % 5 == 0 {
            TickTier::Medium
        } else {
            TickTier::Minor
        }
    }

    /// Inner endpoint of the tick, as a factor of the outer endpoint.
    pub fn length_factor(self) -> f32 {
        match self {
            TickTier::Major => 0.94,
            TickTier::Medium => 0.95,
            TickTier::Minor => 0.97,
        }
    }

    /// Stroke width in disc units.
    pub fn stroke_width(self) -> f32 {
        match self {
            TickTier::Major => 0.02,
            TickTier::Medium => 0.01,
            TickTier::Minor => 0.005,
        }
    }
}

/// One tick mark on the scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    /// Position along the scale, 0 at the left stop.
    pub index: u16,

    /// Polar angle in radians.
    pub angle: f32,

    /// Visual tier.
    pub tier: TickTier,
}

impl TickMark {
    /// Outer endpoint on the unit disc.
    pub fn outer(&self) -> (f32, f32) {
        (
            cosf(self.angle) * TICK_OUTER_RADIUS,
            sinf(self.angle) * TICK_OUTER_RADIUS,
        )
    }

    /// Inner endpoint, shortened by the tier's length factor.
    pub fn inner(&self) -> (f32, f32) {
        let (x, y) = self.outer();
        let factor = self.tier.length_factor();
        (x * factor, y * factor)
    }
}

/// Enumerates the scale's tick marks.
///
/// One tick per `tick_step / 10` speed units, indices
/// `0..=max_speed / (tick_step / 10)` inclusive. The increment is held at
/// one or more so a degenerate `tick_step` cannot divide by zero.
pub fn tick_marks(max_speed: u16, tick_step: u16) -> impl Iterator<Item = TickMark> {
    let increment = (tick_step / 10).max(1);
    let step = if max_speed == 0 {
        0.0
    } else {
        PI / f32::from(max_speed) * f32::from(increment)
    };
    (0..=max_speed / increment).map(move |index| TickMark {
        index,
        angle: PI - step * f32::from(index),
        tier: TickTier::for_index(index),
    })
}

/// One numeric label on the scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleLabel {
    /// The speed value the label displays.
    pub value: u16,

    /// Horizontal offset on the label ring, as a factor of the pixel height.
    pub x: f32,

    /// Vertical offset on the label ring, as a factor of the pixel height.
    pub y: f32,
}

/// Enumerates label positions, one every `tick_step` units from 0 to
/// `max_speed` inclusive, on a ring of radius [`LABEL_RADIUS_FACTOR`].
///
/// The renderer multiplies the offsets by the surface height and centers
/// each label horizontally on its measured text width.
pub fn scale_labels(max_speed: u16, tick_step: u16) -> impl Iterator<Item = ScaleLabel> {
    let step = tick_step.max(1);
    (0..=max_speed / step).map(move |i| {
        let value = i * step;
        let angle = angle_for(value, max_speed);
        ScaleLabel {
            value,
            x: cosf(angle) * LABEL_RADIUS_FACTOR,
            y: sinf(angle) * LABEL_RADIUS_FACTOR,
        }
    })
}

/// Bounds of the digital-speed panel in disc units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelBounds {
    /// Half of the panel width; grows with the digit count of `max_speed`.
    pub half_width: f32,

    /// Upper band edge (flipped disc space, so the larger y).
    pub top: f32,

    /// Lower band edge.
    pub bottom: f32,

    /// Horizontal corner radius.
    pub corner_rx: f32,

    /// Vertical corner radius.
    pub corner_ry: f32,
}

/// Computes the digital-speed panel bounds.
///
/// The half-width reserves `digits(max_speed) + 2` digit slots so the panel
/// widens whenever the scale top gains a digit.
pub fn speed_panel_bounds(max_speed: u16) -> PanelBounds {
    let digits = ceilf(log10f(f32::from(max_speed) + 0.5));
    PanelBounds {
        half_width: (digits + 2.0) * DIGIT_WIDTH / 2.0,
        top: 0.36,
        bottom: 0.14,
        corner_rx: 0.07,
        corner_ry: 0.08,
    }
}
