//! Shared test infrastructure for speed-gauge integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use std::rc::Rc;

use palette::Srgba;
use speed_gauge::{DrawSurface, RepaintHandle, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Repaint Handle
// ============================================================================

/// Repaint handle that counts requests through a shared cell, so the test
/// can keep observing after the gauge takes ownership of the handle
#[derive(Clone)]
pub struct CountingRepaint(Rc<Cell<usize>>);

impl CountingRepaint {
    pub fn new() -> (Self, Rc<Cell<usize>>) {
        let count = Rc::new(Cell::new(0));
        (Self(count.clone()), count)
    }
}

impl RepaintHandle for CountingRepaint {
    fn request_repaint(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

// ============================================================================
// Mock Drawing Surface
// ============================================================================

/// One recorded drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Save,
    Restore,
    Translate(f32, f32),
    Scale(f32, f32),
    Rotate(f32),
    FillCircle {
        cx: f32,
        cy: f32,
        radius: f32,
        color: Srgba,
    },
    StrokeCircle {
        cx: f32,
        cy: f32,
        radius: f32,
        stroke_width: f32,
        color: Srgba,
    },
    FillRoundRect {
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        color: Srgba,
    },
    StrokeRoundRect {
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        stroke_width: f32,
        color: Srgba,
    },
    Line {
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        stroke_width: f32,
        color: Srgba,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        color: Srgba,
    },
}

/// Mock surface that records every drawing operation in call order
pub struct MockSurface {
    width: u32,
    height: u32,
    pub ops: Vec<DrawOp>,
}

impl MockSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    /// Deterministic advance width used by `measure_text`
    pub fn text_width(text: &str, size: f32) -> f32 {
        text.len() as f32 * size * 0.5
    }
}

impl DrawSurface for MockSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn save(&mut self) {
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(DrawOp::Restore);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.ops.push(DrawOp::Translate(dx, dy));
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.ops.push(DrawOp::Scale(sx, sy));
    }

    fn rotate_degrees(&mut self, degrees: f32) {
        self.ops.push(DrawOp::Rotate(degrees));
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Srgba) {
        self.ops.push(DrawOp::FillCircle {
            cx,
            cy,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, cx: f32, cy: f32, radius: f32, stroke_width: f32, color: Srgba) {
        self.ops.push(DrawOp::StrokeCircle {
            cx,
            cy,
            radius,
            stroke_width,
            color,
        });
    }

    fn fill_round_rect(
        &mut self,
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        _rx: f32,
        _ry: f32,
        color: Srgba,
    ) {
        self.ops.push(DrawOp::FillRoundRect {
            left,
            top,
            right,
            bottom,
            color,
        });
    }

    fn stroke_round_rect(
        &mut self,
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        _rx: f32,
        _ry: f32,
        stroke_width: f32,
        color: Srgba,
    ) {
        self.ops.push(DrawOp::StrokeRoundRect {
            left,
            top,
            right,
            bottom,
            stroke_width,
            color,
        });
    }

    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, stroke_width: f32, color: Srgba) {
        self.ops.push(DrawOp::Line {
            x0,
            y0,
            x1,
            y1,
            stroke_width,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Srgba) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            size,
            color,
        });
    }

    fn measure_text(&self, text: &str, size: f32) -> f32 {
        Self::text_width(text, size)
    }
}

// ============================================================================
// Color helpers
// ============================================================================

pub fn colors_equal(a: Srgba, b: Srgba) -> bool {
    const EPSILON: f32 = 0.001;
    (a.red - b.red).abs() < EPSILON
        && (a.green - b.green).abs() < EPSILON
        && (a.blue - b.blue).abs() < EPSILON
        && (a.alpha - b.alpha).abs() < EPSILON
}
