// Library root: board definitions, GPIO primitives and tasks
// No standard library (embedded system)
#![no_std]

// Modules
pub mod boards;
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports from led-core
pub use led_core::{BoardConfig, BoardLeds, Led, LedError, LedId, LedState};

use crate::hal::Stm32Gpio;

/// Board LEDs driven through the real GPIO registers
pub type Stm32BoardLeds = BoardLeds<'static, Stm32Gpio>;

/// LED handle as used by the firmware tasks
pub type Stm32Led = Led<'static, Stm32BoardLeds>;

/// Binding layer for the selected board
pub fn board_leds() -> Stm32BoardLeds {
    BoardLeds::new(&boards::BOARD, Stm32Gpio::new())
}
