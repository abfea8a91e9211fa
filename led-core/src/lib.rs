//! LED Core - Platform-agnostic LED driver
//!
//! This crate has NO hardware dependencies. It holds the two LED layers:
//!
//! - [`board`]: maps logical LED ids to `{port, pin}` descriptors and performs
//!   raw pin I/O through a [`GpioPort`]. Invalid input is a silent no-op.
//! - [`led`]: the logical LED handle with validated init/set/toggle/get calls
//!   that report [`LedError`].

#![no_std]

pub mod board;
pub mod led;
pub mod logic;
pub mod traits;
pub mod types;

// Re-exports for convenient access
pub use board::{BoardConfig, BoardLeds};
pub use led::Led;
pub use logic::{blink_step, pin_mask, resolve};
pub use traits::{GpioPort, LedError, LedHardware, Result};
pub use types::{GpioBank, HwDescriptor, LedId, LedState, PinLevel};
