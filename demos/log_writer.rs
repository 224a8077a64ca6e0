//! # Example: log_writer
//!
//! Attaches the built-in [`LogWriter`] subscriber to a signal and publishes
//! a few payloads through it.
//!
//! ## Run
//! Requires the `logging` feature to export [`LogWriter`].
//! ```bash
//! cargo run --example log_writer --features logging
//! ```

use ezpubsub::{LogWriter, Signal};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let metrics: Signal<(String, u64)> = Signal::new("metrics");
    LogWriter::attach(&metrics)?;

    for (name, value) in [("requests", 42u64), ("errors", 0), ("latency_us", 1250)] {
        metrics.publish((name.to_string(), value))?;
    }
    Ok(())
}
