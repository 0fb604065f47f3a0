use cortex_m::peripheral::syst::SystClkSource;
use cortex_m::peripheral::SYST;
use tick_debounce::{PeriodicTimer, Prescaler, TickClock, TickPeriod};

/// Global millisecond clock advanced by the SysTick interrupt handler.
///
/// Wraps after ~49.7 days of continuous operation; the debouncer handles that.
pub static CLOCK: TickClock = TickClock::new(TickPeriod::MILLISECOND);

/// SysTick driven as the periodic tick timer.
///
/// SysTick counts either the core clock or the core clock / 8, so only
/// `Prescaler::Div1` and `Prescaler::Div8` are meaningful here.
pub struct SysTickTimer {
    syst: SYST,
}

impl SysTickTimer {
    pub fn new(syst: SYST) -> Self {
        Self { syst }
    }
}

impl PeriodicTimer for SysTickTimer {
    fn start_periodic(&mut self, prescaler: Prescaler, compare: u32) {
        let source = match prescaler {
            Prescaler::Div8 => SystClkSource::External,
            _ => SystClkSource::Core,
        };

        self.syst.set_clock_source(source);
        self.syst.set_reload(compare);
        self.syst.clear_current();
        self.syst.enable_counter();
        self.syst.enable_interrupt();
    }
}
