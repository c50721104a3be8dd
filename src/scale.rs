//! Background render pass: disc, digital-speed panel, ticks and text.

use core::fmt::Write;

use palette::Srgba;

use crate::config::GaugeConfig;
use crate::geometry;
use crate::state::RenderState;
use crate::surface::DrawSurface;

/// Panel outline color.
const PANEL_OUTLINE_COLOR: Srgba = Srgba::new(0.0, 0.0, 0.0, 1.0);

/// Panel outline stroke width in disc units.
const PANEL_OUTLINE_WIDTH: f32 = 0.005;

/// Label text size is the surface height over this divisor.
const LABEL_TEXT_DIVISOR: f32 = 10.0;

/// Readout text size is the surface height over this divisor.
const READOUT_TEXT_DIVISOR: f32 = 7.0;

/// Readout baseline as a fraction of the surface height.
const READOUT_BASELINE_FACTOR: f32 = 0.8;

/// Largest u16 has five digits; eight leaves headroom for the formatter.
type ValueText = heapless::String<8>;

fn format_value(value: u16) -> ValueText {
    let mut text = ValueText::new();
    let _ = write!(text, "{value}");
    text
}

/// Draws the gauge background in order: disc, panel fill, panel outline,
/// tick marks, scale labels, digital readout.
///
/// Reads `config` and `state` only; call once per frame whenever the
/// committed speed changes.
pub fn render_scale<S: DrawSurface>(surface: &mut S, config: &GaugeConfig, state: &RenderState) {
    let width = surface.width() as f32;
    let height = surface.height() as f32;

    // Disc pass in normalized coordinates: origin at bottom-center, x
    // spanning half the width each way, y growing upward.
    surface.save();
    surface.translate(width / 2.0, height);
    surface.scale(0.5 * width, -height);

    surface.fill_circle(0.0, 0.0, 1.0, config.fill_color);

    let panel = geometry::speed_panel_bounds(config.max_speed);
    surface.fill_round_rect(
        -panel.half_width,
        panel.top,
        panel.half_width,
        panel.bottom,
        panel.corner_rx,
        panel.corner_ry,
        config.panel_fill_color,
    );
    surface.stroke_round_rect(
        -panel.half_width,
        panel.top,
        panel.half_width,
        panel.bottom,
        panel.corner_rx,
        panel.corner_ry,
        PANEL_OUTLINE_WIDTH,
        PANEL_OUTLINE_COLOR,
    );

    for tick in geometry::tick_marks(config.max_speed, config.tick_step) {
        let (x0, y0) = tick.outer();
        let (x1, y1) = tick.inner();
        surface.draw_line(x0, y0, x1, y1, tick.tier.stroke_width(), config.scale_color);
    }

    surface.restore();

    // Text pass in pixel space, centered horizontally on the gauge.
    surface.save();
    surface.translate(width / 2.0, 0.0);

    let label_size = height / LABEL_TEXT_DIVISOR;
    for label in geometry::scale_labels(config.max_speed, config.tick_step) {
        let text = format_value(label.value);
        let text_width = surface.measure_text(&text, label_size);
        surface.draw_text(
            &text,
            label.x * height - text_width / 2.0,
            height - label.y * height,
            label_size,
            config.scale_text_color,
        );
    }

    let readout = format_value(state.speed());
    let readout_size = height / READOUT_TEXT_DIVISOR;
    let readout_width = surface.measure_text(&readout, readout_size);
    surface.draw_text(
        &readout,
        -readout_width / 2.0,
        height * READOUT_BASELINE_FACTOR,
        readout_size,
        config.speed_text_color,
    );

    surface.restore();
}
