use embedded_hal::digital::v2::InputPin;
use tick_debounce::InputLine;

/// Any `embedded-hal` 0.2 input pin whose reads cannot fail.
///
/// `stm32f0xx-hal` still implements the 0.2 traits, so its pins go through
/// this wrapper instead of `tick_debounce::HalInput`.
pub struct LegacyInput<P> {
    pin: P,
}

impl<P> LegacyInput<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: InputPin<Error = core::convert::Infallible>> InputLine for LegacyInput<P> {
    fn is_high(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(level) => level,
            Err(never) => match never {},
        }
    }
}
