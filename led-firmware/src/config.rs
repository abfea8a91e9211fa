// Project configuration: constants and application settings
// Board wiring lives in crate::boards

use embassy_time::Duration;
use led_core::{LedId, LedState};

// ============================================================================
// LED configuration
// ============================================================================

/// LED slot driven by the blink application
pub const APP_LED: LedId = LedId::Led1;

/// State the LED is put into before the blink loop starts
pub const INITIAL_LED_STATE: LedState = LedState::Off;

// ============================================================================
// Timing configuration
// ============================================================================

/// Blink half-period in milliseconds
/// Loaded at build time from the BLINK_INTERVAL_MS environment variable
/// Set it in the .env file (see .env.example), default 500
pub const BLINK_INTERVAL_MS: u64 = parse_millis(env!("BLINK_INTERVAL_MS"));

/// Blink half-period as an embassy Duration
pub const BLINK_INTERVAL: Duration = Duration::from_millis(BLINK_INTERVAL_MS);

/// Idle period when the board has no LED to blink
pub const IDLE_INTERVAL: Duration = Duration::from_secs(3600);

// build.rs already rejected anything that is not a positive integer
const fn parse_millis(value: &str) -> u64 {
    let bytes = value.as_bytes();
    let mut ms: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let digit = bytes[i];
        assert!(digit.is_ascii_digit(), "BLINK_INTERVAL_MS is not a number");
        ms = ms * 10 + (digit - b'0') as u64;
        i += 1;
    }
    ms
}
