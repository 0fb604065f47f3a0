#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`TickClock`**: Free-running tick counter advanced from a timer interrupt, read atomically
//! - **`TickPeriod`**: Length of one tick (`TickPeriod::MILLISECOND` for the usual 1 ms base)
//! - **`TimerConfig`**: Compare-match value for a timer producing one interrupt per tick
//! - **`PeriodicTimer`**: Trait to implement for your timer peripheral
//! - **`InputLine`**: Trait to implement for your GPIO input (or wrap an `embedded-hal` pin in `HalInput`)
//! - **`DebouncedInput`**: Turns a bouncing input into a stable state and a one-shot activation
//! - **`DebounceConfig`**: Debounce window and `Polarity` for one input
//! - **`InputBank`**: Several debounced inputs sharing one clock
//! - **`Interval`**: Non-blocking periodic deadline for the main loop
//! - **`TimeSource`**: Trait to implement if you drive the debouncer from another time base
//!
//! All timestamps are compared with wraparound-safe subtraction, so a `u32`
//! millisecond counter can roll over after ~49.7 days without disturbing
//! debouncing.

pub mod time;
pub mod types;
pub mod clock;
pub mod timer;
pub mod input;
pub mod debouncer;
pub mod bank;
pub mod interval;

pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{ConfigError, Transition};
pub use clock::{TickClock, TickDuration, TickInstant, TickPeriod};
pub use timer::{CounterWidth, PeriodicTimer, Prescaler, TimerConfig};
pub use input::{HalInput, InputLine, Polarity};
pub use debouncer::{DebounceConfig, DebouncedInput};
pub use bank::{BankError, InputBank, InputId};
pub use interval::Interval;

/// Debounce window used by the reference button firmware, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u32 = 50;
