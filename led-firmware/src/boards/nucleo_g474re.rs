// NUCLEO-G474RE
//
// Same Nucleo-64 layout as the G431RB: LD2 on PA5, active high.

use embassy_stm32::Peripherals;
use embassy_stm32::gpio::{Level, Output, Speed};
use led_core::{BoardConfig, HwDescriptor, LedId};

pub const BOARD_NAME: &str = "NUCLEO-G474RE";

const LED1_PORT: u8 = 0;
const LED1_PIN: u16 = 5;

pub static BOARD: BoardConfig =
    BoardConfig::new().with_led(LedId::Led1, HwDescriptor::new(LED1_PORT, LED1_PIN));

pub struct LedPins {
    _led1: Output<'static>,
}

pub fn claim_led_pins(p: Peripherals) -> LedPins {
    LedPins {
        _led1: Output::new(p.PA5, Level::Low, Speed::Low),
    }
}
