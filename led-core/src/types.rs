//! Core types for LED control
//!
//! Data structures without hardware dependencies

/// Logical LED slot, independent of how a board wires it
///
/// `None` is the "no LED" sentinel. The valid slots are counted by
/// [`LedId::COUNT`]; which of them exist on a board is answered by
/// [`BoardConfig::is_supported`](crate::BoardConfig::is_supported).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LedId {
    None,
    Led1,
    Led2,
    Led3,
}

impl LedId {
    /// Number of addressable LED slots (excludes `None`)
    pub const COUNT: usize = 3;

    /// All addressable slots in table order
    pub const ALL: [LedId; Self::COUNT] = [LedId::Led1, LedId::Led2, LedId::Led3];

    /// Table index of this slot, `None` for the sentinel
    pub const fn index(self) -> Option<usize> {
        match self {
            LedId::None => None,
            LedId::Led1 => Some(0),
            LedId::Led2 => Some(1),
            LedId::Led3 => Some(2),
        }
    }

    /// Maps a raw numeric id (`-1` = none, `0..COUNT` = slots) to a `LedId`
    ///
    /// Anything outside the declared range collapses to `LedId::None`.
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            0 => LedId::Led1,
            1 => LedId::Led2,
            2 => LedId::Led3,
            _ => LedId::None,
        }
    }
}

/// Wiring of one physical LED: GPIO port index and pin number
///
/// `port_index` selects a bank (`0` = GPIOA .. `3` = GPIOD), `pin` is expected
/// in `0..=15`. Values outside those ranges are not rejected here; the binding
/// layer turns them into no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HwDescriptor {
    pub port_index: u8,
    pub pin: u16,
}

impl HwDescriptor {
    pub const fn new(port_index: u8, pin: u16) -> Self {
        Self { port_index, pin }
    }
}

/// Logical LED state seen by application code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LedState {
    #[default]
    Off,
    On,
}

impl From<bool> for LedState {
    fn from(on: bool) -> Self {
        if on { LedState::On } else { LedState::Off }
    }
}

impl From<LedState> for bool {
    fn from(state: LedState) -> Self {
        state == LedState::On
    }
}

/// Electrical level of a GPIO pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinLevel {
    Low,
    High,
}

impl From<bool> for PinLevel {
    fn from(high: bool) -> Self {
        if high { PinLevel::High } else { PinLevel::Low }
    }
}

/// GPIO bank known to the binding layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioBank {
    A,
    B,
    C,
    D,
}

impl GpioBank {
    /// Resolves a descriptor port index, `None` for unknown ports
    pub const fn from_index(port_index: u8) -> Option<Self> {
        match port_index {
            0 => Some(GpioBank::A),
            1 => Some(GpioBank::B),
            2 => Some(GpioBank::C),
            3 => Some(GpioBank::D),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_led_id_index() {
        assert_eq!(LedId::None.index(), None);
        assert_eq!(LedId::Led1.index(), Some(0));
        assert_eq!(LedId::Led3.index(), Some(2));
    }

    #[test]
    fn test_led_id_from_raw_out_of_range() {
        assert_eq!(LedId::from_raw(-1), LedId::None);
        assert_eq!(LedId::from_raw(LedId::COUNT as i32), LedId::None);
        assert_eq!(LedId::from_raw(1), LedId::Led2);
    }

    #[test]
    fn test_led_state_bool_conversion() {
        assert_eq!(LedState::from(true), LedState::On);
        assert_eq!(LedState::from(false), LedState::Off);
        assert!(bool::from(LedState::On));
        assert!(!bool::from(LedState::Off));
    }

    #[test]
    fn test_gpio_bank_from_index() {
        assert_eq!(GpioBank::from_index(0), Some(GpioBank::A));
        assert_eq!(GpioBank::from_index(3), Some(GpioBank::D));
        assert_eq!(GpioBank::from_index(4), None);
    }
}
