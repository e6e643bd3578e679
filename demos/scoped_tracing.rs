//! Scoped and timed tracing example
//!
//! Demonstrates the facade's Enter/Exit bracketing and elapsed-time
//! measurement.
//!
//! Run with: cargo run --example scoped_tracing

use composite_logger::prelude::*;
use std::thread;
use std::time::Duration;

fn main() {
    println!("=== Composite Logger - Scoped Tracing Example ===\n");

    let log = StaticLogger::global();
    log.set_writer(ConsoleWriter::new().format(LogFormatter::medium()));

    let total = log.scope("load_config", || {
        log.info("Parsing configuration");
        40 + 2
    });
    log.info(format!("Configuration entries: {}", total));

    let checksum = log.time("expensive_work", || {
        thread::sleep(Duration::from_millis(150));
        0xdead_beef_u32
    });
    log.info(format!("Checksum: {:08x}", checksum));

    println!("\n=== Example completed successfully! ===");
}
