// Hardware Abstraction Layer (HAL) Module
//
// Implements the led-core GPIO trait on top of the STM32G4 registers.
// Host tests use the mocks in led-tests instead.

pub mod gpio;

pub use gpio::Stm32Gpio;
