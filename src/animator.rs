//! Two-property transition controller with distance-proportional timing.
//!
//! Provides [`AnimationController`], which owns the shared [`RenderState`]
//! and drives one transition at a time, interpolating speed and needle color
//! in lockstep. Also defines the [`RepaintHandle`] trait the host implements
//! to receive redraw requests.

use palette::{Mix, Srgba};

use crate::COLOR_DECELERATE;
use crate::config::GaugeConfig;
use crate::state::{GaugeSnapshot, RenderState};
use crate::time::{TimeDuration, TimeInstant, TimeSource};

/// Trait for the host's repaint-request channel.
///
/// Implement this to be told when the gauge's visual state changed and the
/// surface should be redrawn (invalidate a widget, wake a render loop, set a
/// dirty flag). The controller calls it after every committed change and
/// never otherwise, so an idle gauge stays silent.
pub trait RepaintHandle {
    /// Requests that the gauge be redrawn.
    fn request_repaint(&mut self);
}

/// The current state of the animation controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransitionState {
    /// No transition in flight.
    Idle,
    /// One transition in flight, advanced by `service`.
    Animating,
}

/// Timing information returned by controller operations.
///
/// Indicates whether the controller needs further servicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServiceTiming {
    /// A transition is in flight. Service again at your frame rate,
    /// typically every 16-33ms (30-60 FPS).
    Continuous,

    /// Nothing in flight. No servicing is needed until the next
    /// transition request.
    Complete,
}

/// One in-flight change of `(speed, needle_color)`.
#[derive(Debug, Clone, Copy)]
struct Transition<I> {
    from_speed: u16,
    to_speed: u16,
    from_color: Srgba,
    to_color: Srgba,
    duration_ms: u64,
    started: I,
}

/// Owns the render state and animates it toward requested targets.
///
/// A transition's duration is proportional to the distance travelled:
/// sweeping the entire scale takes `full_sweep_duration_ms`, partial sweeps
/// take proportionally less. Requesting a new target while one is in flight
/// cancels and supersedes it, restarting from whatever values were last
/// committed so there is never a visual jump.
///
/// All methods are called from the host's single UI/animation thread; each
/// call is atomic with respect to the event queue, which is the only
/// synchronization this type needs.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `R` - Repaint handle implementation type
pub struct AnimationController<'t, I: TimeInstant, T: TimeSource<I>, R: RepaintHandle> {
    time_source: &'t T,
    repaint: R,
    max_speed: u16,
    full_sweep_ms: u64,
    state: RenderState,
    transition: Option<Transition<I>>,
}

impl<'t, I: TimeInstant, T: TimeSource<I>, R: RepaintHandle> AnimationController<'t, I, T, R> {
    /// Creates an idle controller at the configured initial speed, needle
    /// colored for deceleration.
    pub fn new(config: &GaugeConfig, time_source: &'t T, repaint: R) -> Self {
        Self {
            time_source,
            repaint,
            max_speed: config.max_speed,
            full_sweep_ms: config.full_sweep_duration_ms,
            state: RenderState::new(config.initial_speed, COLOR_DECELERATE),
            transition: None,
        }
    }

    /// Requests a transition to `(target_speed, target_color)`.
    ///
    /// Cancels and supersedes any in-flight transition; the new one starts
    /// from the last committed values. A target speed above the scale is
    /// clamped. A zero-distance request applies the target values exactly
    /// once, synchronously, and stays in `Idle`.
    ///
    /// # Returns
    /// * `ServiceTiming::Continuous` - transition started, keep servicing
    /// * `ServiceTiming::Complete` - target applied synchronously
    pub fn request_transition(&mut self, target_speed: u16, target_color: Srgba) -> ServiceTiming {
        let target_speed = target_speed.min(self.max_speed);
        let duration_ms = self.duration_for(target_speed);

        if duration_ms == 0 {
            self.transition = None;
            self.commit(target_speed, target_color);
            return ServiceTiming::Complete;
        }

        self.transition = Some(Transition {
            from_speed: self.state.speed(),
            to_speed: target_speed,
            from_color: self.state.needle_color(),
            to_color: target_color,
            duration_ms,
            started: self.time_source.now(),
        });
        ServiceTiming::Continuous
    }

    /// Advances the in-flight transition to the current time and commits the
    /// interpolated values.
    ///
    /// Speed interpolates linearly with rounding to the nearest integer;
    /// color interpolates per-channel including alpha. When the elapsed
    /// fraction reaches 1 the final values are committed and the controller
    /// returns to `Idle`. Calling this while idle is a no-op.
    pub fn service(&mut self) -> ServiceTiming {
        let Some(transition) = self.transition else {
            return ServiceTiming::Complete;
        };

        let elapsed_ms = self
            .time_source
            .now()
            .duration_since(transition.started)
            .as_millis();
        let fraction = (elapsed_ms as f32 / transition.duration_ms as f32).min(1.0);

        let speed = libm::roundf(
            f32::from(transition.from_speed)
                + (f32::from(transition.to_speed) - f32::from(transition.from_speed)) * fraction,
        ) as u16;
        let color = transition.from_color.mix(transition.to_color, fraction);
        self.commit(speed, color);

        if fraction >= 1.0 {
            self.transition = None;
            ServiceTiming::Complete
        } else {
            ServiceTiming::Continuous
        }
    }

    /// Returns the controller's current state.
    pub fn state(&self) -> TransitionState {
        if self.transition.is_some() {
            TransitionState::Animating
        } else {
            TransitionState::Idle
        }
    }

    /// Returns the render state the renderers read.
    pub fn render_state(&self) -> &RenderState {
        &self.state
    }

    /// Captures the committed `(speed, needle_color)` pair.
    pub fn snapshot(&self) -> GaugeSnapshot {
        GaugeSnapshot {
            speed: self.state.speed(),
            needle_color: self.state.needle_color(),
        }
    }

    /// Restores a previously captured pair, cancelling any in-flight
    /// transition so exactly the restored values render.
    ///
    /// An out-of-range speed in the payload is clamped on ingestion.
    pub fn restore(&mut self, snapshot: GaugeSnapshot) {
        self.transition = None;
        self.commit(snapshot.speed.min(self.max_speed), snapshot.needle_color);
    }

    fn commit(&mut self, speed: u16, color: Srgba) {
        if self.state.speed() != speed || self.state.needle_color() != color {
            self.state.set(speed, color);
            self.repaint.request_repaint();
        }
    }

    fn duration_for(&self, target_speed: u16) -> u64 {
        // max_speed == 0 cannot come out of a built config; treat it as
        // "no animation" rather than divide.
        if self.max_speed == 0 {
            return 0;
        }
        let delta = f64::from(self.state.speed().abs_diff(target_speed));
        libm::round(delta / f64::from(self.max_speed) * self.full_sweep_ms as f64) as u64
    }
}
