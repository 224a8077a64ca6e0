//! # Dispatch one publish call over a registry snapshot.
//!
//! Executes a single publish operation against an owned subscriber snapshot.
//! The registry lock is already released by the time these functions run, so
//! callbacks are free to subscribe, publish, or freeze on the same signal.
//!
//! - **Sync dispatch** runs Sync-tagged callbacks inline and never suspends.
//! - **Async dispatch** awaits Async-tagged callbacks one at a time and,
//!   when asked, runs Sync-tagged callbacks inline at their own positions.
//!
//! ## Delivery flow
//!
//! ```text
//! Snapshot [ Sync f1, Async g, Sync f2 ], payload p:
//!
//! publish:               f1(p)            (g skipped)      f2(p)
//! apublish:              (f1 skipped)     g(p).await       (f2 skipped)
//! apublish_all:          f1(p)      ──►   g(p).await  ──►  f2(p)
//! ```
//!
//! ## Rules
//! - Delivery follows subscription order, one subscriber at a time; async
//!   callbacks are never run concurrently with each other within a call.
//! - The first `Err` stops the call; remaining subscribers are not invoked.
//! - Each delivered subscriber receives its own clone of the payload.
//! - No scheduler is assumed: async dispatch is plain sequential awaits,
//!   driveable by any executor the caller happens to use.

use std::sync::Arc;

use crate::error::{CallbackError, SignalError};
use crate::subscribers::{Callback, Subscriber, SubscriptionId};

/// Runs all Sync-tagged subscribers of `snapshot` in order.
///
/// Async-tagged subscribers are skipped: without a scheduler of its own the
/// sync path has nothing to drive them with, and they stay reachable through
/// the async publish variants.
pub(crate) fn dispatch_sync<T: Clone>(
    signal: &Arc<str>,
    snapshot: &[Subscriber<T>],
    payload: &T,
) -> Result<(), SignalError> {
    for sub in snapshot {
        if let Callback::Sync(f) = &sub.callback {
            f(payload.clone()).map_err(|source| subscriber_err(signal, sub.id, source))?;
        }
    }
    Ok(())
}

/// Awaits all Async-tagged subscribers of `snapshot` in order.
///
/// With `also_sync`, Sync-tagged subscribers run inline at their own
/// subscription positions, interleaved with the awaited ones rather than
/// batched before or after them. Without it they are skipped.
pub(crate) async fn dispatch_async<T: Clone>(
    signal: &Arc<str>,
    snapshot: Vec<Subscriber<T>>,
    payload: &T,
    also_sync: bool,
) -> Result<(), SignalError> {
    for sub in snapshot {
        match &sub.callback {
            Callback::Async(f) => {
                f(payload.clone())
                    .await
                    .map_err(|source| subscriber_err(signal, sub.id, source))?;
            }
            Callback::Sync(f) if also_sync => {
                f(payload.clone()).map_err(|source| subscriber_err(signal, sub.id, source))?;
            }
            Callback::Sync(_) => {}
        }
    }
    Ok(())
}

/// Wraps a callback failure with the signal name and failing subscription.
fn subscriber_err(signal: &Arc<str>, id: SubscriptionId, source: CallbackError) -> SignalError {
    SignalError::Subscriber {
        signal: Arc::clone(signal),
        subscription: id,
        source,
    }
}
