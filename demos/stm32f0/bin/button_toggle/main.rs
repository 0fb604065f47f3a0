#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f0xx_hal::prelude::*;

use stm32f0_demos::systick::CLOCK;
use tick_debounce::{DebounceConfig, DebouncedInput, Interval, Transition, DEFAULT_DEBOUNCE_MS};

mod hardware_setup;

/// Heartbeat so a stalled main loop is visible on the RTT console
const HEARTBEAT_MS: u32 = 5_000;

/// SysTick interrupt handler - called once per clock tick
#[cortex_m_rt::exception]
fn SysTick() {
    CLOCK.on_tick();
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== Debounced Button Toggle ===");

    let hw = hardware_setup::init_hardware();
    let mut led = hw.onboard_led;

    let window = CLOCK.duration_from_millis(DEFAULT_DEBOUNCE_MS);
    let mut button = match DebouncedInput::new(hw.button, &CLOCK, DebounceConfig::new(window)) {
        Ok(button) => button,
        Err(err) => panic!("invalid debounce configuration: {}", err),
    };
    let mut heartbeat = Interval::new(&CLOCK, CLOCK.duration_from_millis(HEARTBEAT_MS));

    rprintln!("Debounce window: {} ticks", window.ticks());
    rprintln!("=== System Ready ===");

    loop {
        match button.poll_transition() {
            Some(Transition::Activated) => {
                led.toggle().ok();
                rprintln!("[{}] pressed", CLOCK.now().ticks());
            }
            Some(Transition::Released) => {
                rprintln!("[{}] released", CLOCK.now().ticks());
            }
            None => {}
        }

        if heartbeat.elapsed() {
            rprintln!("[{}] alive", CLOCK.now().ticks());
        }
    }
}
