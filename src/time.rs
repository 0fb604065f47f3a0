//! Time abstraction traits for platform-agnostic timing.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq + PartialOrd {
    /// Zero duration constant.
    const ZERO: Self;

    /// Returns true if this duration is zero.
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Counter-backed instants must compute this with wrapping arithmetic so
    /// that an earlier instant taken just before the counter wrapped still
    /// yields the true elapsed duration.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}
