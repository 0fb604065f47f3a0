use rtt_target::rprintln;
use stm32f0xx_hal::{
    gpio::{gpioa, gpioc, Floating, Input, Output, PullUp, PushPull},
    pac,
    prelude::*,
};
use tick_debounce::{CounterWidth, Prescaler, TimerConfig};

use stm32f0_demos::button::LegacyInput;
use stm32f0_demos::systick::{SysTickTimer, CLOCK};

/// User button on PC13, pulled up, pressed = low
pub type Button = LegacyInput<gpioc::PC13<Input<PullUp>>>;

/// Onboard LED type (PA5)
pub type OnboardLed = gpioa::PA5<Output<PushPull>>;

/// Container for all initialized hardware peripherals
pub struct HardwareContext {
    pub button: Button,
    pub onboard_led: OnboardLed,
}

/// Initialize all hardware peripherals
///
/// - System clock configuration
/// - SysTick timer setup (one interrupt per clock tick)
/// - Button and onboard LED GPIO
pub fn init_hardware() -> HardwareContext {
    let mut dp = pac::Peripherals::take().unwrap();
    let cp = cortex_m::Peripherals::take().unwrap();

    let mut rcc = dp.RCC.configure().freeze(&mut dp.FLASH);
    let sysclk_hz = rcc.clocks.sysclk().0;
    rprintln!("System clock configured: {} Hz", sysclk_hz);

    configure_systick(sysclk_hz, cp.SYST);

    let gpioa = dp.GPIOA.split(&mut rcc);
    let gpioc = dp.GPIOC.split(&mut rcc);

    HardwareContext {
        button: setup_button(gpioc.pc13),
        onboard_led: setup_onboard_led(gpioa.pa5),
    }
}

/// Program SysTick so that each interrupt is one clock tick.
fn configure_systick(sysclk_hz: u32, syst: cortex_m::peripheral::SYST) {
    let config = match TimerConfig::new(
        sysclk_hz,
        Prescaler::Div1,
        CLOCK.period(),
        CounterWidth::Bits24,
    ) {
        Ok(config) => config,
        Err(err) => panic!("SysTick cannot produce the tick period: {}", err),
    };

    let mut timer = SysTickTimer::new(syst);
    config.start(&mut timer);

    // SysTick keeps running after the wrapper is dropped.
    rprintln!(
        "SysTick reload {} for a {} us tick",
        config.compare(),
        CLOCK.period().as_micros()
    );
}

/// Configure user button (PC13) with pull-up
fn setup_button(pc13: gpioc::PC13<Input<Floating>>) -> Button {
    let pin = cortex_m::interrupt::free(|cs| pc13.into_pull_up_input(cs));

    rprintln!("Button configured on PC13");
    LegacyInput::new(pin)
}

/// Configure onboard LED (PA5) as output
fn setup_onboard_led(pa5: gpioa::PA5<Input<Floating>>) -> OnboardLed {
    let led = cortex_m::interrupt::free(|cs| pa5.into_push_pull_output(cs));

    rprintln!("Onboard LED configured on PA5");
    led
}
