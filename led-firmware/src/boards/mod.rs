// Board definitions
//
// Each board module exports the same items:
// - BOARD_NAME: human readable board name (logged at boot)
// - BOARD: the LED wiring table (led_core::BoardConfig)
// - LedPins / claim_led_pins(): puts the LED pins into push-pull output mode
//
// Exactly one board is selected through a cargo feature.

#[cfg(all(feature = "nucleo-g431rb", feature = "nucleo-g474re"))]
compile_error!("select exactly one board feature (nucleo-g431rb or nucleo-g474re)");

#[cfg(not(any(feature = "nucleo-g431rb", feature = "nucleo-g474re")))]
compile_error!("no board selected - enable the nucleo-g431rb or nucleo-g474re feature");

#[cfg(feature = "nucleo-g431rb")]
mod nucleo_g431rb;
#[cfg(feature = "nucleo-g431rb")]
pub use nucleo_g431rb::*;

#[cfg(feature = "nucleo-g474re")]
mod nucleo_g474re;
#[cfg(feature = "nucleo-g474re")]
pub use nucleo_g474re::*;
