//! The gauge facade a host embeds.

use crate::animator::{AnimationController, RepaintHandle, ServiceTiming, TransitionState};
use crate::config::GaugeConfig;
use crate::input::{PointerEvent, PressBehavior};
use crate::needle::render_needle;
use crate::scale::render_scale;
use crate::state::{GaugeSnapshot, RenderState};
use crate::surface::DrawSurface;
use crate::time::{TimeInstant, TimeSource};

/// A circular speed gauge with an animated needle and digital readout.
///
/// The host supplies three things: a [`TimeSource`] for the animation clock,
/// a [`RepaintHandle`] to receive redraw requests, and a [`DrawSurface`] at
/// every [`draw`](SpeedGauge::draw) call. The gauge supplies everything
/// else: geometry, rendering, the press/release response and the transition
/// animation.
///
/// ```ignore
/// let config = GaugeConfig::builder().max_speed(220).build();
/// let mut gauge = SpeedGauge::new(config, &clock, repaint);
///
/// // host event loop
/// gauge.on_pointer_event(PointerEvent::Press);
/// loop {
///     if gauge.service() == ServiceTiming::Complete {
///         break;
///     }
///     gauge.draw(&mut surface);
/// }
/// ```
pub struct SpeedGauge<'t, I: TimeInstant, T: TimeSource<I>, R: RepaintHandle> {
    config: GaugeConfig,
    behavior: PressBehavior,
    animator: AnimationController<'t, I, T, R>,
}

impl<'t, I: TimeInstant, T: TimeSource<I>, R: RepaintHandle> SpeedGauge<'t, I, T, R> {
    /// Creates a gauge with the default press behavior.
    pub fn new(config: GaugeConfig, time_source: &'t T, repaint: R) -> Self {
        Self::with_behavior(config, PressBehavior::default(), time_source, repaint)
    }

    /// Creates a gauge with a custom accelerate/decelerate color pair.
    pub fn with_behavior(
        config: GaugeConfig,
        behavior: PressBehavior,
        time_source: &'t T,
        repaint: R,
    ) -> Self {
        let animator = AnimationController::new(&config, time_source, repaint);
        Self {
            config,
            behavior,
            animator,
        }
    }

    /// Performs the full render pass: background scale, then the needle.
    pub fn draw<S: DrawSurface>(&self, surface: &mut S) {
        let state = self.animator.render_state();
        render_scale(surface, &self.config, state);
        render_needle(surface, &self.config, state);
    }

    /// Feeds a forwarded pointer event into the gauge.
    ///
    /// Press animates toward the top of the scale, release back toward zero.
    /// Returns whether the event was consumed; unconsumed events should fall
    /// through to the host's default handling.
    pub fn on_pointer_event(&mut self, event: PointerEvent) -> bool {
        match self.behavior.target_for(event, self.config.max_speed) {
            Some(target) => {
                self.animator.request_transition(target.speed, target.color);
                true
            }
            None => false,
        }
    }

    /// Advances any in-flight transition to the current clock time.
    ///
    /// Call once per frame while this returns [`ServiceTiming::Continuous`].
    pub fn service(&mut self) -> ServiceTiming {
        self.animator.service()
    }

    /// Returns the controller's current state.
    pub fn state(&self) -> TransitionState {
        self.animator.state()
    }

    /// Returns the values the renderers read.
    pub fn render_state(&self) -> &RenderState {
        self.animator.render_state()
    }

    /// Returns the gauge configuration.
    pub fn config(&self) -> &GaugeConfig {
        &self.config
    }

    /// Captures the committed `(speed, needle_color)` pair for host-managed
    /// state persistence.
    pub fn snapshot(&self) -> GaugeSnapshot {
        self.animator.snapshot()
    }

    /// Restores a previously captured pair, cancelling any in-flight
    /// transition. Out-of-range speeds are clamped on ingestion.
    pub fn restore(&mut self, snapshot: GaugeSnapshot) {
        self.animator.restore(snapshot);
    }
}
