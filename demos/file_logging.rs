//! File logging example
//!
//! Demonstrates fanning records out to a file at the full format while the
//! console shows only warnings and above at the simple format.
//!
//! Run with: cargo run --example file_logging

use composite_logger::prelude::*;

fn main() {
    println!("=== Composite Logger - File Logging Example ===\n");

    let log = StaticLogger::new();
    log.set_writer(ForkWriter::new(vec![
        Box::new(FileWriter::new("app.log").format(LogFormatter::full())),
        Box::new(
            ConsoleWriter::new()
                .format(LogFormatter::simple())
                .filter_level(LogLevel::Warning),
        ),
    ]));

    log.info("Written to app.log only");
    log.warning("Written to app.log and the console");
    log.error("Also in both places");

    // Unbinding drops the file writer, which drains its queue.
    log.clear_writer();

    println!("\nDone - inspect app.log for the full-format records.");
}
