// NUCLEO-G431RB
//
// User LED LD2 (green) sits on PA5, active high.

use embassy_stm32::Peripherals;
use embassy_stm32::gpio::{Level, Output, Speed};
use led_core::{BoardConfig, HwDescriptor, LedId};

pub const BOARD_NAME: &str = "NUCLEO-G431RB";

/// Port index 0 = GPIOA
const LED1_PORT: u8 = 0;
const LED1_PIN: u16 = 5;

pub static BOARD: BoardConfig =
    BoardConfig::new().with_led(LedId::Led1, HwDescriptor::new(LED1_PORT, LED1_PIN));

/// Output drivers of the board LEDs
///
/// Must stay alive: dropping an `Output` returns the pin to its reset mode.
pub struct LedPins {
    _led1: Output<'static>,
}

/// Configures every LED pin as a low-speed push-pull output, LED off
pub fn claim_led_pins(p: Peripherals) -> LedPins {
    LedPins {
        _led1: Output::new(p.PA5, Level::Low, Speed::Low),
    }
}
