//! Core types shared by the clock and the debouncer.

/// A confirmed change of a debounced input's stable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// The input settled into its active level (e.g. button pressed).
    Activated,

    /// The input settled back into its idle level (e.g. button released).
    Released,
}

impl Transition {
    /// Returns the transition that leads into `active`.
    #[inline]
    pub(crate) fn into_state(active: bool) -> Self {
        if active {
            Transition::Activated
        } else {
            Transition::Released
        }
    }
}

/// Configuration errors.
///
/// Every variant is a contract violation caught when a clock, timer or
/// debouncer is configured. Polling never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Debounce window of zero duration.
    ZeroDebounceWindow,

    /// Tick period of zero.
    ZeroTickPeriod,

    /// CPU clock frequency of zero.
    ZeroCpuFrequency,

    /// Tick period is not a whole number of prescaled timer counts.
    InexactTickPeriod,

    /// Compare value does not fit the timer counter.
    CompareOutOfRange {
        /// Compare value the period would require.
        compare: u32,
        /// Largest value the counter can hold.
        max: u32,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroDebounceWindow => {
                write!(f, "debounce window must be longer than zero ticks")
            }
            ConfigError::ZeroTickPeriod => {
                write!(f, "tick period must be non-zero")
            }
            ConfigError::ZeroCpuFrequency => {
                write!(f, "CPU clock frequency must be non-zero")
            }
            ConfigError::InexactTickPeriod => {
                write!(
                    f,
                    "tick period is not a whole number of prescaled timer counts"
                )
            }
            ConfigError::CompareOutOfRange { compare, max } => {
                write!(
                    f,
                    "compare value {} exceeds timer counter maximum of {}",
                    compare, max
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
