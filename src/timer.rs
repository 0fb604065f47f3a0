//! Compare-match timer configuration.
//!
//! The tick clock relies on an external timer peripheral that fires an
//! interrupt once per [`TickPeriod`]. [`TimerConfig`] derives the compare-match
//! value for such a timer from the CPU clock and prescaler, and
//! [`PeriodicTimer`] is the capability the peripheral driver implements.
//!
//! For a timer running in clear-on-compare mode the interrupt fires every
//! `compare + 1` prescaled counts, so
//!
//! ```text
//! compare = cpu_hz * period / prescaler - 1
//! ```
//!
//! An 8 MHz CPU with a /64 prescaler and a 1 ms tick gives a compare value of 124.

use crate::clock::TickPeriod;
use crate::types::ConfigError;

/// Timer clock prescaler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Prescaler {
    /// CPU clock, undivided.
    Div1,
    /// CPU clock / 8.
    Div8,
    /// CPU clock / 64.
    Div64,
    /// CPU clock / 256.
    Div256,
    /// CPU clock / 1024.
    Div1024,
}

impl Prescaler {
    /// Returns the division factor.
    pub const fn divisor(&self) -> u32 {
        match self {
            Prescaler::Div1 => 1,
            Prescaler::Div8 => 8,
            Prescaler::Div64 => 64,
            Prescaler::Div256 => 256,
            Prescaler::Div1024 => 1024,
        }
    }
}

/// Width of the timer counter, which bounds the compare value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CounterWidth {
    /// 8-bit counter (e.g. AVR Timer0).
    Bits8,
    /// 16-bit counter.
    Bits16,
    /// 24-bit counter (e.g. Cortex-M SysTick).
    Bits24,
    /// 32-bit counter.
    Bits32,
}

impl CounterWidth {
    /// Largest value the counter can hold.
    pub const fn max(&self) -> u32 {
        match self {
            CounterWidth::Bits8 => 0xFF,
            CounterWidth::Bits16 => 0xFFFF,
            CounterWidth::Bits24 => 0x00FF_FFFF,
            CounterWidth::Bits32 => u32::MAX,
        }
    }
}

/// Timer peripheral capable of raising an interrupt at a fixed period.
///
/// Implement this for your timer hardware. The interrupt handler it enables
/// is expected to call [`TickClock::on_tick`](crate::TickClock::on_tick).
pub trait PeriodicTimer {
    /// Starts the timer in clear-on-compare mode with the given prescaler and
    /// compare value, with its compare interrupt enabled.
    fn start_periodic(&mut self, prescaler: Prescaler, compare: u32);
}

/// Validated compare-match configuration for one tick period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerConfig {
    cpu_hz: u32,
    prescaler: Prescaler,
    period: TickPeriod,
    compare: u32,
}

impl TimerConfig {
    /// Derives the compare value for `period`.
    ///
    /// # Errors
    /// * `ZeroCpuFrequency` - `cpu_hz` is zero
    /// * `InexactTickPeriod` - the period is not a whole number of prescaled counts
    /// * `CompareOutOfRange` - the compare value does not fit `width`
    pub fn new(
        cpu_hz: u32,
        prescaler: Prescaler,
        period: TickPeriod,
        width: CounterWidth,
    ) -> Result<Self, ConfigError> {
        if cpu_hz == 0 {
            return Err(ConfigError::ZeroCpuFrequency);
        }

        let cycles = u64::from(cpu_hz) * u64::from(period.as_micros());
        let divisor = u64::from(prescaler.divisor()) * 1_000_000;
        if cycles % divisor != 0 {
            return Err(ConfigError::InexactTickPeriod);
        }

        let counts = cycles / divisor;
        let compare = counts - 1;
        let max = width.max();
        if compare > u64::from(max) {
            return Err(ConfigError::CompareOutOfRange {
                compare: u32::try_from(compare).unwrap_or(u32::MAX),
                max,
            });
        }

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "timer: {} Hz / {} -> compare {} per {} us tick",
            cpu_hz,
            prescaler.divisor(),
            compare,
            period.as_micros()
        );

        Ok(Self {
            cpu_hz,
            prescaler,
            period,
            compare: compare as u32,
        })
    }

    /// Returns the compare-match value to program into the timer.
    #[inline]
    pub fn compare(&self) -> u32 {
        self.compare
    }

    /// Returns the prescaler.
    #[inline]
    pub fn prescaler(&self) -> Prescaler {
        self.prescaler
    }

    /// Returns the tick period this configuration produces.
    #[inline]
    pub fn period(&self) -> TickPeriod {
        self.period
    }

    /// Returns the CPU clock frequency in hertz.
    #[inline]
    pub fn cpu_hz(&self) -> u32 {
        self.cpu_hz
    }

    /// Programs and starts `timer` with this configuration.
    pub fn start<T: PeriodicTimer>(&self, timer: &mut T) {
        timer.start_periodic(self.prescaler, self.compare);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockTimer {
        started: Option<(Prescaler, u32)>,
    }

    impl PeriodicTimer for MockTimer {
        fn start_periodic(&mut self, prescaler: Prescaler, compare: u32) {
            self.started = Some((prescaler, compare));
        }
    }

    #[test]
    fn avr_timer0_millisecond_tick() {
        let config = TimerConfig::new(
            8_000_000,
            Prescaler::Div64,
            TickPeriod::MILLISECOND,
            CounterWidth::Bits8,
        )
        .unwrap();

        assert_eq!(config.compare(), 124);
    }

    #[test]
    fn systick_millisecond_tick() {
        let config = TimerConfig::new(
            48_000_000,
            Prescaler::Div1,
            TickPeriod::MILLISECOND,
            CounterWidth::Bits24,
        )
        .unwrap();

        assert_eq!(config.compare(), 47_999);
    }

    #[test]
    fn rejects_compare_beyond_counter_width() {
        let result = TimerConfig::new(
            8_000_000,
            Prescaler::Div8,
            TickPeriod::MILLISECOND,
            CounterWidth::Bits8,
        );

        assert_eq!(
            result,
            Err(ConfigError::CompareOutOfRange {
                compare: 999,
                max: 255
            })
        );
    }

    #[test]
    fn rejects_inexact_period() {
        let result = TimerConfig::new(
            1_000_000,
            Prescaler::Div1024,
            TickPeriod::MILLISECOND,
            CounterWidth::Bits8,
        );

        assert_eq!(result, Err(ConfigError::InexactTickPeriod));
    }

    #[test]
    fn rejects_zero_cpu_frequency() {
        let result = TimerConfig::new(0, Prescaler::Div64, TickPeriod::MILLISECOND, CounterWidth::Bits8);
        assert_eq!(result, Err(ConfigError::ZeroCpuFrequency));
    }

    #[test]
    fn start_programs_the_timer() {
        let config = TimerConfig::new(
            8_000_000,
            Prescaler::Div64,
            TickPeriod::MILLISECOND,
            CounterWidth::Bits8,
        )
        .unwrap();
        let mut timer = MockTimer::default();

        config.start(&mut timer);

        assert_eq!(timer.started, Some((Prescaler::Div64, 124)));
    }
}
