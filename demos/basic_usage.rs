//! Basic pipeline usage example
//!
//! Demonstrates console logging through the facade with filters and
//! formatters.
//!
//! Run with: cargo run --example basic_usage

use composite_logger::prelude::*;

fn main() {
    println!("=== Composite Logger - Basic Usage Example ===\n");

    let log = StaticLogger::new();

    // Bind a console writer with the simple format
    log.set_writer(ConsoleWriter::new().format(LogFormatter::simple()));

    println!("1. Logging at different levels:");
    log.trace("This is a trace message");
    log.debug("This is a debug message");
    log.info("This is an info message");
    log.warning("This is a warning message");
    log.error("This is an error message");
    log.fatal("This is a fatal message");

    println!("\n2. Raising the threshold to WARNING:");
    log.set_writer(
        ConsoleWriter::new()
            .format(LogFormatter::simple())
            .filter_level(LogLevel::Warning),
    );
    log.debug("Debug message (hidden)");
    log.info("Info message (hidden)");
    log.warning("Warning message (visible)");
    log.error("Error message (visible)");

    println!("\n3. Default categories:");
    log.set_writer(ConsoleWriter::new().format(LogFormatter::simple()));
    log.set_category("CORE");
    log.info("Tagged with the default category");
    log.log_in(LogLevel::Info, "NET", "Tagged explicitly");

    println!("\n=== Example completed successfully! ===");
}
