//! # LogWriter — simple payload printer
//!
//! A minimal built-in subscriber that prints every published payload to
//! stdout. Use it for tests or demos.
//!
//! ## Example output
//! ```text
//! [chat_message] Message { sender: "alice", body: "hi all", receiver: "bob" }
//! [status] "alice joined"
//! ```

use std::fmt::Debug;
use std::sync::Arc;

use crate::error::SignalError;
use crate::signal::Signal;

use super::SubscriptionId;

/// Payload printer subscriber.
///
/// Enabled via the `logging` feature. Not intended for production use;
/// register your own callback for structured logging or metrics.
pub struct LogWriter;

impl LogWriter {
    /// Subscribes a printing callback to `signal` and returns its id.
    ///
    /// The callback never fails, so it cannot abort a dispatch. Subscribing
    /// follows the usual freeze rule and fails on a frozen signal.
    ///
    /// # Example
    /// ```
    /// use ezpubsub::{LogWriter, Signal};
    ///
    /// let signal: Signal<String> = Signal::new("status");
    /// LogWriter::attach(&signal)?;
    /// signal.publish("ready".to_string())?;
    /// # Ok::<(), ezpubsub::SignalError>(())
    /// ```
    pub fn attach<T>(signal: &Signal<T>) -> Result<SubscriptionId, SignalError>
    where
        T: Clone + Send + Sync + Debug + 'static,
    {
        let name: Arc<str> = Arc::from(signal.name());
        signal.subscribe(move |payload: T| {
            println!("[{name}] {payload:?}");
            Ok(())
        })
    }
}
