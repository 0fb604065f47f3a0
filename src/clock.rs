//! Interrupt-driven tick clock.
//!
//! Provides [`TickClock`], a free-running `u32` counter advanced by a periodic
//! timer interrupt, together with the [`TickInstant`] and [`TickDuration`]
//! types it hands out. The counter wraps silently; consumers compare instants
//! with [`TimeInstant::duration_since`], which is wraparound-safe.

use core::cell::Cell;
use critical_section::Mutex;

use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::ConfigError;

/// Point in time measured in clock ticks since start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickInstant(pub u32);

impl TickInstant {
    /// Returns the raw tick count.
    #[inline]
    pub fn ticks(&self) -> u32 {
        self.0
    }
}

impl TimeInstant for TickInstant {
    type Duration = TickDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TickDuration(self.0.wrapping_sub(earlier.0))
    }
}

/// Span of time measured in clock ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickDuration(pub u32);

impl TickDuration {
    /// Returns the number of ticks in this duration.
    #[inline]
    pub fn ticks(&self) -> u32 {
        self.0
    }
}

impl TimeDuration for TickDuration {
    const ZERO: Self = TickDuration(0);
}

/// Length of one clock tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickPeriod {
    micros: u32,
}

impl TickPeriod {
    /// One tick per millisecond.
    pub const MILLISECOND: TickPeriod = TickPeriod { micros: 1_000 };

    /// Creates a tick period from a length in microseconds.
    ///
    /// # Errors
    /// * `ZeroTickPeriod` - `micros` is zero
    pub const fn from_micros(micros: u32) -> Result<Self, ConfigError> {
        if micros == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        Ok(TickPeriod { micros })
    }

    /// Creates a tick period from a length in milliseconds.
    ///
    /// # Errors
    /// * `ZeroTickPeriod` - `millis` is zero (or overflows microseconds)
    pub const fn from_millis(millis: u32) -> Result<Self, ConfigError> {
        match millis.checked_mul(1_000) {
            Some(micros) => Self::from_micros(micros),
            None => Err(ConfigError::ZeroTickPeriod),
        }
    }

    /// Returns the tick length in microseconds.
    #[inline]
    pub const fn as_micros(&self) -> u32 {
        self.micros
    }

    /// Returns the tick rate in hertz, rounded down.
    #[inline]
    pub const fn frequency_hz(&self) -> u32 {
        1_000_000 / self.micros
    }
}

impl Default for TickPeriod {
    fn default() -> Self {
        TickPeriod::MILLISECOND
    }
}

/// Millisecond-style clock driven by a periodic timer interrupt.
///
/// The clock is meant to live in a `static` shared between the timer
/// interrupt handler, which calls [`on_tick`](TickClock::on_tick), and the
/// main loop, which reads it through [`now`](TickClock::now). Both sides go
/// through a `critical_section`, so the `u32` read is never torn on targets
/// narrower than 32 bits.
///
/// ```ignore
/// static CLOCK: TickClock = TickClock::new(TickPeriod::MILLISECOND);
///
/// #[exception]
/// fn SysTick() {
///     CLOCK.on_tick();
/// }
/// ```
pub struct TickClock {
    ticks: Mutex<Cell<u32>>,
    period: TickPeriod,
}

impl TickClock {
    /// Creates a clock starting at tick zero.
    pub const fn new(period: TickPeriod) -> Self {
        Self::starting_at(period, 0)
    }

    /// Creates a clock starting at an arbitrary tick count.
    ///
    /// Starting just below `u32::MAX` makes the counter wrap within the first
    /// few seconds, which is handy for exercising wraparound on hardware.
    pub const fn starting_at(period: TickPeriod, ticks: u32) -> Self {
        Self {
            ticks: Mutex::new(Cell::new(ticks)),
            period,
        }
    }

    /// Advances the clock by one tick.
    ///
    /// Call this from the timer interrupt handler, once per period. It is the
    /// only writer of the counter.
    #[inline]
    pub fn on_tick(&self) {
        critical_section::with(|cs| {
            let ticks = self.ticks.borrow(cs);
            ticks.set(ticks.get().wrapping_add(1));
        });
    }

    /// Returns a consistent snapshot of the tick counter.
    #[inline]
    pub fn now(&self) -> TickInstant {
        critical_section::with(|cs| TickInstant(self.ticks.borrow(cs).get()))
    }

    /// Returns the configured tick period.
    #[inline]
    pub fn period(&self) -> TickPeriod {
        self.period
    }

    /// Converts a duration in milliseconds to whole ticks, rounding up.
    ///
    /// Saturates at `u32::MAX` ticks.
    pub fn duration_from_millis(&self, millis: u32) -> TickDuration {
        let micros = u64::from(millis) * 1_000;
        let period = u64::from(self.period.as_micros());
        let ticks = micros.div_ceil(period);
        TickDuration(u32::try_from(ticks).unwrap_or(u32::MAX))
    }
}

impl TimeSource<TickInstant> for TickClock {
    fn now(&self) -> TickInstant {
        TickClock::now(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let clock = TickClock::new(TickPeriod::MILLISECOND);
        assert_eq!(clock.now(), TickInstant(0));
    }

    #[test]
    fn each_tick_advances_by_one() {
        let clock = TickClock::new(TickPeriod::MILLISECOND);
        for expected in 1..=25 {
            clock.on_tick();
            assert_eq!(clock.now().ticks(), expected);
        }
    }

    #[test]
    fn reads_without_tick_are_equal() {
        let clock = TickClock::new(TickPeriod::MILLISECOND);
        clock.on_tick();
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn counter_wraps_silently() {
        let clock = TickClock::starting_at(TickPeriod::MILLISECOND, u32::MAX);
        clock.on_tick();
        assert_eq!(clock.now(), TickInstant(0));
    }

    #[test]
    fn duration_since_spans_wraparound() {
        let before = TickInstant(u32::MAX - 9);
        let after = TickInstant(20);
        assert_eq!(after.duration_since(before), TickDuration(30));
    }

    #[test]
    fn period_rejects_zero() {
        assert_eq!(TickPeriod::from_micros(0), Err(ConfigError::ZeroTickPeriod));
        assert_eq!(TickPeriod::from_millis(0), Err(ConfigError::ZeroTickPeriod));
    }

    #[test]
    fn millisecond_period_is_one_kilohertz() {
        assert_eq!(TickPeriod::MILLISECOND.frequency_hz(), 1_000);
        assert_eq!(TickPeriod::from_millis(1), Ok(TickPeriod::MILLISECOND));
    }

    #[test]
    fn millis_convert_to_ticks_rounding_up() {
        let ms_clock = TickClock::new(TickPeriod::MILLISECOND);
        assert_eq!(ms_clock.duration_from_millis(50), TickDuration(50));

        let slow_clock = TickClock::new(TickPeriod::from_millis(4).unwrap());
        assert_eq!(slow_clock.duration_from_millis(50), TickDuration(13));
        assert_eq!(slow_clock.duration_from_millis(48), TickDuration(12));
    }
}
