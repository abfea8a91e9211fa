// LED Blink Task - toggles the board LED at a fixed interval
use defmt::{error, info};
use embassy_time::Timer;
use led_core::{BoardLeds, Led, LedHardware, blink_step};

use crate::config::{BLINK_INTERVAL, INITIAL_LED_STATE};
use crate::hal::Stm32Gpio;

/// LED blink logic - business logic without hardware dependency
///
/// Puts the LED into its initial state, then toggles it forever with
/// `BLINK_INTERVAL` between toggles. LED errors are logged and the loop
/// keeps going; none of them is fatal.
///
/// # Trait-based abstraction
/// The generic parameter `H: LedHardware` allows:
/// - Real hardware (`BoardLeds<Stm32Gpio>`) in production code
/// - Any other `LedHardware` implementation (e.g. a mock)
pub async fn led_blink_logic<H: LedHardware>(mut led: Led<'_, H>) {
    if let Err(e) = led.set_state(INITIAL_LED_STATE) {
        error!("LED: initial set_state failed: {}", e);
    }

    loop {
        match blink_step(&mut led) {
            Ok(state) => info!("Blink! LED {}", state),
            Err(e) => error!("LED: toggle failed: {}", e),
        }

        Timer::after(BLINK_INTERVAL).await;
    }
}

/// LED blink task - embassy task wrapper
///
/// Takes an already initialized LED handle and runs `led_blink_logic()`.
#[embassy_executor::task]
pub async fn led_blink_task(led: Led<'static, BoardLeds<'static, Stm32Gpio>>) {
    led_blink_logic(led).await
}
