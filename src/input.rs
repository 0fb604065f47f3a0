//! Pin-reading capability and active polarity.

use core::convert::Infallible;

use embedded_hal::digital::InputPin;

/// Trait for abstracting a digital input line.
///
/// Implement this for your GPIO hardware so the debouncer can sample it.
/// Reading a level cannot fail; handle any hardware errors internally.
/// Pin direction and pull resistors are configured by the caller before the
/// line is handed to a debouncer.
pub trait InputLine {
    /// Returns true if the line currently reads high.
    fn is_high(&mut self) -> bool;
}

impl<L: InputLine + ?Sized> InputLine for &mut L {
    fn is_high(&mut self) -> bool {
        (**self).is_high()
    }
}

/// Adapter from an infallible `embedded-hal` input pin to [`InputLine`].
///
/// Most HALs report `Infallible` for GPIO reads, so their pins can be wrapped
/// directly:
///
/// ```ignore
/// let button = HalInput::new(gpioc.pc13.into_pull_up_input());
/// ```
#[derive(Debug)]
pub struct HalInput<P> {
    pin: P,
}

impl<P> HalInput<P> {
    /// Wraps `pin`.
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Returns the wrapped pin.
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: InputPin<Error = Infallible>> InputLine for HalInput<P> {
    fn is_high(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(level) => level,
            Err(never) => match never {},
        }
    }
}

/// Which electrical level counts as "active".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// High level is active (e.g. button to VCC with a pull-down).
    ActiveHigh,

    /// Low level is active (e.g. button to ground with a pull-up).
    #[default]
    ActiveLow,
}

impl Polarity {
    /// Maps an electrical level to the logical active state.
    #[inline]
    pub fn is_active(&self, level_high: bool) -> bool {
        match self {
            Polarity::ActiveHigh => level_high,
            Polarity::ActiveLow => !level_high,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::ErrorType;

    struct FixedPin(bool);

    impl ErrorType for FixedPin {
        type Error = Infallible;
    }

    impl InputPin for FixedPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.0)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.0)
        }
    }

    #[test]
    fn polarity_maps_levels() {
        assert!(Polarity::ActiveHigh.is_active(true));
        assert!(!Polarity::ActiveHigh.is_active(false));
        assert!(Polarity::ActiveLow.is_active(false));
        assert!(!Polarity::ActiveLow.is_active(true));
    }

    #[test]
    fn default_polarity_is_active_low() {
        assert_eq!(Polarity::default(), Polarity::ActiveLow);
    }

    #[test]
    fn hal_adapter_reads_pin_level() {
        let mut high = HalInput::new(FixedPin(true));
        let mut low = HalInput::new(FixedPin(false));

        assert!(high.is_high());
        assert!(!low.is_high());
        assert!(low.into_inner().is_low().unwrap());
    }
}
