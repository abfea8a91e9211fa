// GPIO primitives for the LED binding layer
//
// Drives STM32G4 GPIO banks through their BSRR/ODR/IDR registers, addressed
// by bank and pin mask like the vendor HAL's WritePin/TogglePin/ReadPin.

use embassy_stm32::pac;
use embassy_stm32::pac::gpio::regs::Bsrr;
use led_core::{GpioBank, GpioPort, PinLevel};

/// Real hardware GPIO port
///
/// Zero-sized: all state lives in the GPIO registers. Pin modes and bank
/// clocks are set up beforehand by `embassy_stm32::init` and the board's
/// `claim_led_pins`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stm32Gpio;

impl Stm32Gpio {
    pub const fn new() -> Self {
        Self
    }

    fn block(bank: GpioBank) -> pac::gpio::Gpio {
        match bank {
            GpioBank::A => pac::GPIOA,
            GpioBank::B => pac::GPIOB,
            GpioBank::C => pac::GPIOC,
            GpioBank::D => pac::GPIOD,
        }
    }
}

impl GpioPort for Stm32Gpio {
    fn write_pin(&mut self, bank: GpioBank, mask: u16, level: PinLevel) {
        // BSRR: lower half sets, upper half resets
        let bits = match level {
            PinLevel::High => mask as u32,
            PinLevel::Low => (mask as u32) << 16,
        };
        Self::block(bank).bsrr().write_value(Bsrr(bits));
    }

    fn toggle_pin(&mut self, bank: GpioBank, mask: u16) {
        let block = Self::block(bank);
        let odr = block.odr().read().0 & 0xFFFF;
        let mask = mask as u32;
        // Reset the pins that are high, set the ones that are low, in one write
        block
            .bsrr()
            .write_value(Bsrr(((odr & mask) << 16) | (!odr & mask)));
    }

    fn read_pin(&mut self, bank: GpioBank, mask: u16) -> PinLevel {
        let idr = Self::block(bank).idr().read().0;
        PinLevel::from(idr & mask as u32 != 0)
    }
}
