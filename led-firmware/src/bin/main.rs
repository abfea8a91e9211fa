// Do not use the standard library (embedded system)
#![no_std]
// No regular main() entry point (provided by cortex-m-rt / embassy-executor)
#![no_main]
// Forbid large stack frames (the stack is small on embedded systems)
#![deny(clippy::large_stack_frames)]

// Embassy async runtime
use embassy_executor::Spawner;
use embassy_time::Timer;

// defmt RTT logger and panic handler
use {defmt_rtt as _, panic_probe as _};

use defmt::{error, info, warn};

// Project modules and configuration
use stm32g4_blinky::boards::{self, BOARD, BOARD_NAME};
use stm32g4_blinky::config::{APP_LED, BLINK_INTERVAL_MS, IDLE_INTERVAL};
use stm32g4_blinky::tasks::led_blink_task;
use stm32g4_blinky::{Led, board_leds};

/// Main entry point
///
/// Initializes clocks and GPIO, binds the application LED and spawns the
/// blink task. Afterwards main() sleeps - all work runs in the task.
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    // Default clock tree; also enables the GPIO bank clocks
    let p = embassy_stm32::init(Default::default());
    info!("Boot: {}", BOARD_NAME);

    // LED pins into push-pull output mode; kept alive for the whole run
    let _led_pins = boards::claim_led_pins(p);

    if BOARD.is_supported(APP_LED) {
        start_blinking(spawner);
    } else {
        warn!("{} has no {} - nothing to blink", BOARD_NAME, APP_LED);
    }

    // Main loop: sleeps (all work runs in the blink task)
    loop {
        Timer::after(IDLE_INTERVAL).await;
    }
}

/// Binds the application LED to its board descriptor and spawns the blink task
fn start_blinking(spawner: Spawner) {
    let leds = board_leds();
    let descriptor = leds.get_descriptor(APP_LED);

    let mut led = Led::new(leds);
    if let Err(e) = led.init(descriptor) {
        error!("LED {}: init failed: {}", APP_LED, e);
        return;
    }
    info!(
        "LED {} bound to {}, blinking every {} ms",
        APP_LED, descriptor, BLINK_INTERVAL_MS
    );

    // Spawn LED task
    spawner.spawn(led_blink_task(led)).unwrap();
}
