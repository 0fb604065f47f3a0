//! Time-based input debouncer.
//!
//! Provides [`DebouncedInput`], which samples an [`InputLine`] once per poll
//! and publishes a stable state only after the raw level has stayed unchanged
//! for a configured window. Every raw change restarts the window, so bouncing
//! contacts delay acceptance instead of leaking through.
//!
//! All timing goes through a [`TimeSource`], normally a shared
//! [`TickClock`](crate::TickClock). Elapsed time is computed with
//! [`TimeInstant::duration_since`], which stays correct when the tick counter
//! wraps.

use crate::input::{InputLine, Polarity};
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{ConfigError, Transition};

/// Debounce window and polarity for one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceConfig<D: TimeDuration> {
    window: D,
    polarity: Polarity,
}

impl<D: TimeDuration> DebounceConfig<D> {
    /// Creates an active-low configuration with the given window.
    pub fn new(window: D) -> Self {
        Self {
            window,
            polarity: Polarity::ActiveLow,
        }
    }

    /// Sets which level counts as active.
    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    /// Returns the debounce window.
    #[inline]
    pub fn window(&self) -> D {
        self.window
    }

    /// Returns the active polarity.
    #[inline]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Checks the configuration.
    ///
    /// # Errors
    /// * `ZeroDebounceWindow` - the window is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.is_zero() {
            return Err(ConfigError::ZeroDebounceWindow);
        }
        Ok(())
    }
}

/// A debounced digital input.
///
/// Owns its input line and borrows the shared time source. Call
/// [`poll`](DebouncedInput::poll) once per main-loop iteration; it returns
/// true exactly once each time the input settles into its active level.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `P` - Input line implementation type
/// * `T` - Time source implementation type
pub struct DebouncedInput<'t, I: TimeInstant, P: InputLine, T: TimeSource<I>> {
    line: P,
    time_source: &'t T,
    config: DebounceConfig<I::Duration>,
    raw_state: bool,
    last_raw_state: bool,
    stable_state: bool,
    last_change: I,
}

impl<'t, I: TimeInstant, P: InputLine, T: TimeSource<I>> DebouncedInput<'t, I, P, T> {
    /// Binds `line` to a new debouncer with all state inactive.
    ///
    /// The window starts at the time source's current instant, so an input
    /// that is already active at start-up is reported one window later like
    /// any other press.
    ///
    /// # Errors
    /// * `ZeroDebounceWindow` - the configured window is zero
    pub fn new(
        line: P,
        time_source: &'t T,
        config: DebounceConfig<I::Duration>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            line,
            time_source,
            config,
            raw_state: false,
            last_raw_state: false,
            stable_state: false,
            last_change: time_source.now(),
        })
    }

    /// Samples the line and returns true if the input just became active.
    ///
    /// Edge-triggered: holding the input active yields true on the confirming
    /// poll only.
    pub fn poll(&mut self) -> bool {
        self.poll_transition() == Some(Transition::Activated)
    }

    /// Samples the line and reports a confirmed change of the stable state.
    ///
    /// # Returns
    /// * `Some(Transition::Activated)` - the input settled into its active level
    /// * `Some(Transition::Released)` - the input settled back to idle
    /// * `None` - no confirmed change on this poll
    pub fn poll_transition(&mut self) -> Option<Transition> {
        let raw = self.config.polarity.is_active(self.line.is_high());
        self.raw_state = raw;

        if raw != self.last_raw_state {
            self.last_change = self.time_source.now();

            #[cfg(feature = "defmt")]
            defmt::trace!("debounce: raw change to {}, window restarted", raw);
        }

        let elapsed = self.time_source.now().duration_since(self.last_change);
        let mut transition = None;

        if elapsed >= self.config.window {
            if raw != self.stable_state {
                self.stable_state = raw;
                transition = Some(Transition::into_state(raw));

                #[cfg(feature = "defmt")]
                defmt::debug!("debounce: stable state confirmed {}", transition);
            }
            // Re-arm so the next confirmation needs a fresh window.
            self.last_change = self.time_source.now();
        }

        self.last_raw_state = raw;
        transition
    }

    /// Returns the debounced logical state (true = active).
    #[inline]
    pub fn is_active(&self) -> bool {
        self.stable_state
    }

    /// Returns the most recent raw sample after polarity mapping.
    #[inline]
    pub fn raw_state(&self) -> bool {
        self.raw_state
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &DebounceConfig<I::Duration> {
        &self.config
    }

    /// Consumes the debouncer and returns its input line.
    pub fn release(self) -> P {
        self.line
    }
}
