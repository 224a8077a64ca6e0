//! # Subscriber callbacks and their identity.
//!
//! A subscriber is a callback registered on a [`Signal`](crate::Signal),
//! tagged as sync or async at subscription time. Both kinds are stored
//! behind `Arc`s so registry snapshots can invoke them after the registry
//! lock has been released.
//!
//! ## Architecture
//! ```text
//! subscribe(f)       ──► Callback::Sync(Arc<dyn Fn(T) -> CallbackResult>)
//! subscribe_async(f) ──► Callback::Async(Arc<dyn Fn(T) -> BoxCallbackFuture>)
//!                             │
//!                             ▼
//!                    Subscriber { id, callback }    (one registry slot)
//! ```
//!
//! ## Rules
//! - The sync/async tag is fixed when the callback is registered; the
//!   dispatchers match on it, callers never inspect it.
//! - Cloning a [`Subscriber`] clones `Arc` handles, never the callback
//!   itself, so snapshotting a registry is cheap and needs no `T: Clone`.
//! - Ids are handed out from a per-signal counter and never reused, even
//!   after the subscriber is removed.

use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;

use crate::error::CallbackResult;

/// Boxed future returned by async subscriber callbacks.
pub(crate) type BoxCallbackFuture = BoxFuture<'static, CallbackResult>;

/// Type-erased sync callback: takes the payload by value, returns a result.
pub(crate) type SyncCallback<T> = Arc<dyn Fn(T) -> CallbackResult + Send + Sync>;

/// Type-erased async callback: takes the payload by value, returns a boxed
/// future that resolves to the callback result.
pub(crate) type AsyncCallback<T> = Arc<dyn Fn(T) -> BoxCallbackFuture + Send + Sync>;

/// Identifier of a single subscription, unique within its signal.
///
/// Returned by [`Signal::subscribe`](crate::Signal::subscribe) and
/// [`Signal::subscribe_async`](crate::Signal::subscribe_async); pass it to
/// [`Signal::unsubscribe`](crate::Signal::unsubscribe) to remove the
/// callback again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub(crate) u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A subscriber callback, tagged sync or async.
pub(crate) enum Callback<T> {
    /// Runs inline during sync publish.
    Sync(SyncCallback<T>),
    /// Awaited during async publish; skipped by sync publish.
    Async(AsyncCallback<T>),
}

// Manual impl: `derive(Clone)` would demand `T: Clone`, but only the `Arc`
// handles are cloned here.
impl<T> Clone for Callback<T> {
    fn clone(&self) -> Self {
        match self {
            Callback::Sync(f) => Callback::Sync(Arc::clone(f)),
            Callback::Async(f) => Callback::Async(Arc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callback::Sync(_) => f.write_str("Callback::Sync(..)"),
            Callback::Async(_) => f.write_str("Callback::Async(..)"),
        }
    }
}

/// One registry slot: a callback plus the id it was registered under.
pub(crate) struct Subscriber<T> {
    pub(crate) id: SubscriptionId,
    pub(crate) callback: Callback<T>,
}

impl<T> Clone for Subscriber<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            callback: self.callback.clone(),
        }
    }
}

impl<T> fmt::Debug for Subscriber<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscriber")
            .field("id", &self.id)
            .field("callback", &self.callback)
            .finish()
    }
}
