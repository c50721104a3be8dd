//! Drawing surface abstraction.
//!
//! Defines [`DrawSurface`], the minimal capability set the renderers compile
//! against. Implement it for your canvas, framebuffer, or vector backend to
//! host the gauge. The renderers issue coordinates in whatever space the
//! current transform establishes; a backend only has to apply its transform
//! stack the way a 2D canvas does.

use palette::Srgba;

/// Trait for abstracting a 2D drawing surface.
///
/// Methods cannot fail: implementations should handle backend errors
/// internally (drop the primitive, log, panic in debug builds - whatever fits
/// the host). Colors arrive as [`Srgba`] with components in 0.0-1.0;
/// implementations convert to their native pixel format.
///
/// The transform methods mirror a canvas transform stack: `save` pushes the
/// current transform, `restore` pops it, and `translate`/`scale`/
/// `rotate_degrees` compose onto the current one. The gauge always pairs
/// every `save` with a `restore` and never leaves a transform behind.
pub trait DrawSurface {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Pushes the current transform onto the transform stack.
    fn save(&mut self);

    /// Pops the most recently saved transform.
    fn restore(&mut self);

    /// Translates the coordinate space by `(dx, dy)`.
    fn translate(&mut self, dx: f32, dy: f32);

    /// Scales the coordinate space by `(sx, sy)`. Negative factors flip.
    fn scale(&mut self, sx: f32, sy: f32);

    /// Rotates the coordinate space counterclockwise in the flipped gauge
    /// space (the backend sees it as a plain canvas rotation).
    fn rotate_degrees(&mut self, degrees: f32);

    /// Fills a circle centered at `(cx, cy)`.
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Srgba);

    /// Strokes a circle outline centered at `(cx, cy)`.
    fn stroke_circle(&mut self, cx: f32, cy: f32, radius: f32, stroke_width: f32, color: Srgba);

    /// Fills a rounded rectangle spanning `left..right` x `top..bottom` with
    /// corner radii `(rx, ry)`.
    ///
    /// `top`/`bottom` follow the current transform; in the gauge's flipped
    /// disc space "top" is the numerically larger y.
    #[allow(clippy::too_many_arguments)]
    fn fill_round_rect(
        &mut self,
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        rx: f32,
        ry: f32,
        color: Srgba,
    );

    /// Strokes a rounded rectangle outline.
    #[allow(clippy::too_many_arguments)]
    fn stroke_round_rect(
        &mut self,
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        rx: f32,
        ry: f32,
        stroke_width: f32,
        color: Srgba,
    );

    /// Draws a line segment from `(x0, y0)` to `(x1, y1)`.
    #[allow(clippy::too_many_arguments)]
    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, stroke_width: f32, color: Srgba);

    /// Draws text with its baseline-left corner at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Srgba);

    /// Measures the advance width of `text` at the given size, in the
    /// current coordinate space.
    fn measure_text(&self, text: &str, size: f32) -> f32;
}
