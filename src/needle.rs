//! Needle render pass: the animated pointer and its hinge.

use crate::config::GaugeConfig;
use crate::geometry::{self, HINGE_RADIUS, NEEDLE_LENGTH};
use crate::state::RenderState;
use crate::surface::DrawSurface;

/// Half of the needle base width; the two body lines meet at the tip.
const NEEDLE_HALF_BASE: f32 = 0.01;

/// Needle body stroke width in disc units.
const NEEDLE_STROKE_WIDTH: f32 = 0.02;

/// Hinge outline stroke width in disc units.
const HINGE_OUTLINE_WIDTH: f32 = 0.01;

/// Draws the needle at the committed speed and the hinge on top of it.
///
/// The needle body takes the animated needle color; the hinge fill stays on
/// the configured hinge color, outlined in the disc fill color so it reads
/// as punched through the background.
pub fn render_needle<S: DrawSurface>(surface: &mut S, config: &GaugeConfig, state: &RenderState) {
    let width = surface.width() as f32;
    let height = surface.height() as f32;

    surface.save();
    surface.translate(width / 2.0, height);
    surface.scale(0.5 * width, -height);
    surface.rotate_degrees(geometry::needle_rotation_degrees(
        state.speed(),
        config.max_speed,
    ));

    let needle_color = state.needle_color();
    surface.draw_line(
        NEEDLE_HALF_BASE,
        0.0,
        0.0,
        NEEDLE_LENGTH,
        NEEDLE_STROKE_WIDTH,
        needle_color,
    );
    surface.draw_line(
        -NEEDLE_HALF_BASE,
        0.0,
        0.0,
        NEEDLE_LENGTH,
        NEEDLE_STROKE_WIDTH,
        needle_color,
    );

    surface.fill_circle(0.0, 0.0, HINGE_RADIUS, config.hinge_color);
    surface.stroke_circle(0.0, 0.0, HINGE_RADIUS, HINGE_OUTLINE_WIDTH, config.fill_color);

    surface.restore();
}
