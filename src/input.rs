//! Pointer-event mapping.
//!
//! Press-and-hold accelerates the gauge to the top of the scale; releasing
//! decelerates it back to zero. Everything else passes through to the host's
//! default handling.

use palette::Srgba;

use crate::{COLOR_ACCELERATE, COLOR_DECELERATE};

/// Raw pointer events forwarded by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PointerEvent {
    /// Primary pointer pressed.
    Press,
    /// Primary pointer released.
    Release,
    /// Pointer moved while pressed. Not consumed.
    Move,
    /// Gesture cancelled by the host. Not consumed.
    Cancel,
}

/// A transition target produced by an input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionTarget {
    /// Target speed.
    pub speed: u16,

    /// Target needle color.
    pub color: Srgba,
}

/// Maps press/release events to transition targets.
///
/// The color pair defaults to the crate's accelerate/decelerate constants;
/// hosts with their own urgency palette can substitute both fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressBehavior {
    /// Needle color animated in while accelerating.
    pub accelerate_color: Srgba,

    /// Needle color animated in while decelerating.
    pub decelerate_color: Srgba,
}

impl Default for PressBehavior {
    fn default() -> Self {
        Self {
            accelerate_color: COLOR_ACCELERATE,
            decelerate_color: COLOR_DECELERATE,
        }
    }
}

impl PressBehavior {
    /// Returns the transition target for `event`, or `None` when the event
    /// is not one this gauge consumes.
    pub fn target_for(&self, event: PointerEvent, max_speed: u16) -> Option<TransitionTarget> {
        match event {
            PointerEvent::Press => Some(TransitionTarget {
                speed: max_speed,
                color: self.accelerate_color,
            }),
            PointerEvent::Release => Some(TransitionTarget {
                speed: 0,
                color: self.decelerate_color,
            }),
            PointerEvent::Move | PointerEvent::Cancel => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_targets_top_of_scale() {
        let behavior = PressBehavior::default();
        let target = behavior.target_for(PointerEvent::Press, 180).unwrap();
        assert_eq!(target.speed, 180);
        assert_eq!(target.color, COLOR_ACCELERATE);
    }

    #[test]
    fn release_targets_zero() {
        let behavior = PressBehavior::default();
        let target = behavior.target_for(PointerEvent::Release, 180).unwrap();
        assert_eq!(target.speed, 0);
        assert_eq!(target.color, COLOR_DECELERATE);
    }

    #[test]
    fn other_events_are_not_consumed() {
        let behavior = PressBehavior::default();
        assert!(behavior.target_for(PointerEvent::Move, 180).is_none());
        assert!(behavior.target_for(PointerEvent::Cancel, 180).is_none());
    }
}
