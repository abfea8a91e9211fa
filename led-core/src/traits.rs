//! Hardware Abstraction Traits
//!
//! These traits define the interfaces for hardware access
//! without a concrete implementation.

use core::fmt;

use crate::types::{GpioBank, HwDescriptor, PinLevel};

/// Error type for logical LED operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    /// A required argument was absent
    InvalidParameter,
    /// The handle was never bound to a descriptor
    NotInitialized,
}

impl fmt::Display for LedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedError::InvalidParameter => write!(f, "invalid parameter"),
            LedError::NotInitialized => write!(f, "LED not initialized"),
        }
    }
}

/// Result type for logical LED operations
pub type Result<T> = core::result::Result<T, LedError>;

/// Platform GPIO primitives
///
/// `mask` is a bit mask over the 16 pins of `bank`. A zero mask touches no pin.
///
/// # Implementations
/// - **Production:** `Stm32Gpio` (STM32G4 GPIO registers)
/// - **Testing:** `MockGpio` (records calls)
pub trait GpioPort {
    fn write_pin(&mut self, bank: GpioBank, mask: u16, level: PinLevel);
    fn toggle_pin(&mut self, bank: GpioBank, mask: u16);
    fn read_pin(&mut self, bank: GpioBank, mask: u16) -> PinLevel;
}

impl<T: GpioPort + ?Sized> GpioPort for &mut T {
    fn write_pin(&mut self, bank: GpioBank, mask: u16, level: PinLevel) {
        (**self).write_pin(bank, mask, level)
    }

    fn toggle_pin(&mut self, bank: GpioBank, mask: u16) {
        (**self).toggle_pin(bank, mask)
    }

    fn read_pin(&mut self, bank: GpioBank, mask: u16) -> PinLevel {
        (**self).read_pin(bank, mask)
    }
}

/// Raw pin I/O of the board binding layer
///
/// Every method accepts an absent descriptor and treats it, like any other
/// unresolvable descriptor, as a silent no-op. There is no error channel.
pub trait LedHardware {
    /// Drives the LED pin high (`true`) or low (`false`)
    fn set_state(&mut self, hw: Option<&HwDescriptor>, state: bool);

    /// Inverts the LED pin
    fn toggle(&mut self, hw: Option<&HwDescriptor>);

    /// Reads the LED pin, `false` when the descriptor cannot be resolved
    fn get_state(&mut self, hw: Option<&HwDescriptor>) -> bool;
}

impl<T: LedHardware + ?Sized> LedHardware for &mut T {
    fn set_state(&mut self, hw: Option<&HwDescriptor>, state: bool) {
        (**self).set_state(hw, state)
    }

    fn toggle(&mut self, hw: Option<&HwDescriptor>) {
        (**self).toggle(hw)
    }

    fn get_state(&mut self, hw: Option<&HwDescriptor>) -> bool {
        (**self).get_state(hw)
    }
}
