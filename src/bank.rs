use crate::debouncer::{DebounceConfig, DebouncedInput};
use crate::input::InputLine;
use crate::time::{TimeInstant, TimeSource};
use crate::types::{ConfigError, Transition};
use heapless::Vec;

/// An identifier for an input within a bank.
///
/// This is a simple wrapper around `usize` that provides type safety for input
/// identifiers. Users pick the ID when adding an input and use it to query
/// that input afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputId(pub usize);

impl From<usize> for InputId {
    fn from(id: usize) -> Self {
        InputId(id)
    }
}

impl From<InputId> for usize {
    fn from(id: InputId) -> Self {
        id.0
    }
}

/// Errors that can occur during bank operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BankError {
    /// The specified input ID does not exist in the bank.
    InvalidInputId(InputId),

    /// Attempted to add an input with an ID that already exists.
    DuplicateInputId(InputId),

    /// The input ID exceeds the bank's capacity.
    InputIdOutOfBounds { id: InputId, capacity: usize },

    /// The input configuration was rejected.
    Config(ConfigError),
}

impl core::fmt::Display for BankError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BankError::InvalidInputId(id) => {
                write!(f, "input ID {} does not exist in bank", id.0)
            }
            BankError::DuplicateInputId(id) => {
                write!(f, "input ID {} already exists in bank", id.0)
            }
            BankError::InputIdOutOfBounds { id, capacity } => {
                write!(
                    f,
                    "input ID {} exceeds bank capacity of {}",
                    id.0, capacity
                )
            }
            BankError::Config(err) => {
                write!(f, "configuration error: {}", err)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BankError {}

impl From<ConfigError> for BankError {
    fn from(err: ConfigError) -> Self {
        BankError::Config(err)
    }
}

/// A fixed-capacity group of debounced inputs sharing one time source.
///
/// Convenience wrapper for boards with several buttons: each input is stored
/// under a user-chosen `InputId` and the whole group is polled in one call.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `P` - Input line implementation type (must be same for all inputs in the bank)
/// * `T` - Time source implementation type
/// * `MAX_INPUTS` - Maximum number of inputs this bank can hold
pub struct InputBank<'t, I: TimeInstant, P: InputLine, T: TimeSource<I>, const MAX_INPUTS: usize> {
    inputs: [Option<DebouncedInput<'t, I, P, T>>; MAX_INPUTS],
    time_source: &'t T,
}

impl<'t, I, P, T, const MAX_INPUTS: usize> InputBank<'t, I, P, T, MAX_INPUTS>
where
    I: TimeInstant,
    P: InputLine,
    T: TimeSource<I>,
{
    /// Creates a new empty bank.
    pub fn new(time_source: &'t T) -> Self {
        Self {
            inputs: core::array::from_fn(|_| None),
            time_source,
        }
    }

    /// Adds a debounced input under `id`.
    ///
    /// # Errors
    /// * `InputIdOutOfBounds` - The ID exceeds the bank's capacity
    /// * `DuplicateInputId` - An input with this ID already exists
    /// * `Config` - The configuration was rejected
    pub fn add_input(
        &mut self,
        id: InputId,
        line: P,
        config: DebounceConfig<I::Duration>,
    ) -> Result<(), BankError> {
        let idx = id.0;

        if idx >= MAX_INPUTS {
            return Err(BankError::InputIdOutOfBounds {
                id,
                capacity: MAX_INPUTS,
            });
        }

        if self.inputs[idx].is_some() {
            return Err(BankError::DuplicateInputId(id));
        }

        self.inputs[idx] = Some(DebouncedInput::new(line, self.time_source, config)?);
        Ok(())
    }

    /// Polls every input once and returns the IDs that activated on this pass.
    pub fn poll_all(&mut self) -> Vec<InputId, MAX_INPUTS> {
        let mut activated = Vec::new();

        for (idx, slot) in self.inputs.iter_mut().enumerate() {
            if let Some(input) = slot {
                if input.poll_transition() == Some(Transition::Activated) {
                    // One slot per input, so this cannot overflow.
                    let _ = activated.push(InputId(idx));
                }
            }
        }

        activated
    }

    /// Polls a single input and reports a confirmed transition.
    ///
    /// # Errors
    /// Returns `InvalidInputId` if the input does not exist in the bank.
    pub fn poll(&mut self, id: InputId) -> Result<Option<Transition>, BankError> {
        Ok(self.input_mut(id)?.poll_transition())
    }

    /// Returns the debounced state of the specified input.
    ///
    /// # Errors
    /// Returns `InvalidInputId` if the input does not exist in the bank.
    pub fn is_active(&self, id: InputId) -> Result<bool, BankError> {
        let idx = id.0;

        if idx >= MAX_INPUTS {
            return Err(BankError::InvalidInputId(id));
        }

        let input = self.inputs[idx]
            .as_ref()
            .ok_or(BankError::InvalidInputId(id))?;

        Ok(input.is_active())
    }

    /// Returns the number of inputs currently in the bank.
    pub fn len(&self) -> usize {
        self.inputs.iter().filter(|s| s.is_some()).count()
    }

    /// Returns true if the bank contains no inputs.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the bank contains an input with the given ID.
    pub fn contains(&self, id: InputId) -> bool {
        let idx = id.0;
        idx < MAX_INPUTS && self.inputs[idx].is_some()
    }

    fn input_mut(&mut self, id: InputId) -> Result<&mut DebouncedInput<'t, I, P, T>, BankError> {
        self.inputs
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(BankError::InvalidInputId(id))
    }
}
