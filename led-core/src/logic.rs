//! Pure helper functions
//!
//! Functions without hardware dependencies (testable!)

use crate::led::Led;
use crate::traits::{LedHardware, Result};
use crate::types::{GpioBank, HwDescriptor, LedState};

/// Single-bit mask for a pin number, `0` for pins outside `0..=15`
///
/// # Examples
///
/// ```
/// # use led_core::pin_mask;
/// assert_eq!(pin_mask(5), 0b0000_0000_0010_0000);
/// assert_eq!(pin_mask(20), 0);
/// ```
pub const fn pin_mask(pin: u16) -> u16 {
    if pin > 15 { 0 } else { 1 << pin }
}

/// Resolves a descriptor to its GPIO bank and pin mask
///
/// Returns `None` for an absent descriptor or an unknown port index. An
/// out-of-range pin still resolves, with a zero mask.
pub fn resolve(hw: Option<&HwDescriptor>) -> Option<(GpioBank, u16)> {
    let hw = hw?;
    let bank = GpioBank::from_index(hw.port_index)?;
    Some((bank, pin_mask(hw.pin)))
}

/// One blink iteration: toggle the LED and read back the new state
pub fn blink_step<H: LedHardware>(led: &mut Led<'_, H>) -> Result<LedState> {
    led.toggle()?;
    led.get_state()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_mask_bounds() {
        assert_eq!(pin_mask(0), 0x0001);
        assert_eq!(pin_mask(15), 0x8000);
        assert_eq!(pin_mask(16), 0);
        assert_eq!(pin_mask(u16::MAX), 0);
    }

    #[test]
    fn test_resolve_absent_descriptor() {
        assert_eq!(resolve(None), None);
    }

    #[test]
    fn test_resolve_unknown_port() {
        let hw = HwDescriptor::new(9, 5);
        assert_eq!(resolve(Some(&hw)), None);
    }

    #[test]
    fn test_resolve_out_of_range_pin_keeps_bank() {
        let hw = HwDescriptor::new(1, 20);
        assert_eq!(resolve(Some(&hw)), Some((GpioBank::B, 0)));
    }

    #[test]
    fn test_resolve_led1_on_nucleo() {
        let hw = HwDescriptor::new(0, 5);
        assert_eq!(resolve(Some(&hw)), Some((GpioBank::A, 0b10_0000)));
    }
}
