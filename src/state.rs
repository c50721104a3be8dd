//! Shared render state and its persistence snapshot.

use palette::Srgba;

/// The values the renderers read each frame.
///
/// Owned and mutated exclusively by the animation controller; everything
/// else holds `&RenderState`. The speed invariant (`0..=max_speed`) is
/// maintained by the controller clamping at every external boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderState {
    speed: u16,
    needle_color: Srgba,
}

impl RenderState {
    pub(crate) fn new(speed: u16, needle_color: Srgba) -> Self {
        Self {
            speed,
            needle_color,
        }
    }

    pub(crate) fn set(&mut self, speed: u16, needle_color: Srgba) {
        self.speed = speed;
        self.needle_color = needle_color;
    }

    /// Current speed shown by the needle and the digital readout.
    pub fn speed(&self) -> u16 {
        self.speed
    }

    /// Current needle body color.
    pub fn needle_color(&self) -> Srgba {
        self.needle_color
    }
}

/// Persistence payload for host-managed lifecycle boundaries.
///
/// `restore(snapshot())` reproduces the exact `(speed, needle_color)` pair;
/// a payload with an out-of-range speed is clamped on ingestion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeSnapshot {
    /// Saved speed value.
    pub speed: u16,

    /// Saved needle color.
    pub needle_color: Srgba,
}
