//! Clock abstraction traits for host-agnostic animation timing.
//!
//! The gauge never reads a wall clock directly. The host hands it a
//! [`TimeSource`] (a monotonic clock) and the animation controller measures
//! elapsed transition time by subtracting instants. Any clock works:
//! `std::time`, `embassy_time`, a hardware timer, or a test mock advanced by
//! hand.

/// Trait for abstracting monotonic time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// `earlier` is always an instant previously returned by the same
    /// [`TimeSource`], so implementations may assume monotonic ordering.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;
}
