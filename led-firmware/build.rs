// Build script: runs before compilation
// Bakes build-time tunables into the binary and configures the linker for cortex-m

/// Blink half-period used when neither the environment nor .env set one
const DEFAULT_BLINK_INTERVAL_MS: &str = "500";

fn main() {
    // Load .env file with build-time tunables
    // Ignore the error if .env does not exist (defaults are used then)
    match dotenvy::dotenv() {
        Ok(path) => println!("cargo:rerun-if-changed={}", path.display()),
        Err(e) => eprintln!("⚠️  .env file not found: {} (using defaults)", e),
    }

    // Pass the blink interval on to the compiler
    // The value is baked into the code at compile time
    let interval = std::env::var("BLINK_INTERVAL_MS")
        .unwrap_or_else(|_| DEFAULT_BLINK_INTERVAL_MS.to_string());
    match interval.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => println!("cargo:rustc-env=BLINK_INTERVAL_MS={}", ms),
        _ => panic!(
            "BLINK_INTERVAL_MS must be a positive number of milliseconds, got {:?}",
            interval
        ),
    }
    println!("cargo:rerun-if-env-changed=BLINK_INTERVAL_MS");

    // Register helpful error handler for linker errors
    linker_be_nice();

    // Add linker scripts:

    // 1. --nmagic - flash sections do not need page alignment
    println!("cargo:rustc-link-arg-bins=--nmagic");

    // 2. link.x - cortex-m-rt memory layout and startup code
    //    Uses the memory.x that embassy-stm32 generates for the selected chip
    println!("cargo:rustc-link-arg-bins=-Tlink.x");

    // 3. defmt.x - defmt logging support
    //    Defines symbols for defmt's binary log format
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
}

// Error handler: prints helpful hints on linker errors
// Invoked by the linker as "--error-handling-script"
fn linker_be_nice() {
    let args: Vec<String> = std::env::args().collect();

    // When invoked by the linker (with error kind and symbol name)
    if args.len() > 2 {
        let kind = &args[1]; // Error kind (e.g. "undefined-symbol")
        let what = &args[2]; // Symbol name (e.g. "_defmt_...")

        match kind.as_str() {
            "undefined-symbol" => match what.as_str() {
                what if what.starts_with("_defmt_") => {
                    eprintln!();
                    eprintln!(
                        "💡 `defmt` not found - make sure `defmt.x` is added as a linker script and you have included `use defmt_rtt as _;`"
                    );
                    eprintln!();
                }
                "_stack_start" | "__RESET_VECTOR" => {
                    eprintln!();
                    eprintln!(
                        "💡 Is the linker script `link.x` missing, or is no board feature (and so no chip / memory.x) selected?"
                    );
                    eprintln!();
                }
                what if what.starts_with("__embassy_time") || what.starts_with("_embassy_time") => {
                    eprintln!();
                    eprintln!(
                        "💡 No embassy time driver - enable `time-driver-any` on embassy-stm32."
                    );
                    eprintln!();
                }
                _ => (),
            },
            // we don't have anything helpful for "missing-lib" yet
            _ => {
                std::process::exit(1);
            }
        }

        std::process::exit(0);
    }

    match std::env::current_exe() {
        Ok(exe) => println!(
            "cargo:rustc-link-arg-bins=--error-handling-script={}",
            exe.display()
        ),
        Err(e) => println!("cargo:warning=linker hints disabled: {}", e),
    }
}
