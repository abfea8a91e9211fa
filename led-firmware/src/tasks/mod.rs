// Task module: contains the embassy tasks
//
// The blink task is the only task; main() spawns it and then idles.

pub mod led_blink;

// Re-export tasks for convenient import
pub use led_blink::led_blink_task;
