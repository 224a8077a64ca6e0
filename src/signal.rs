//! # Signal: a typed publish/subscribe channel.
//!
//! [`Signal`] composes the subscriber registry with the sync and async
//! dispatchers behind one cloneable handle.
//!
//! ## Architecture
//! ```text
//! Publishers (any thread, any runtime):       Subscribers (subscription order):
//!   publish(p) ──────┐
//!   apublish(p) ─────┼──► freeze gate ──► registry snapshot ──► callback(p.clone())
//!   apublish_all(p) ─┘                    (lock released before callbacks run)
//! ```
//!
//! ## Rules
//! - **Handle semantics**: `clone()` yields another handle to the same
//!   channel; independent signals share nothing and never contend.
//! - **Typed payloads**: `T` is fixed at the construction site; there is no
//!   runtime tag to check or mismatch.
//! - **Freeze is one-way**: `freeze()` permanently blocks new subscriptions
//!   and, under [`SignalConfig::frozen_only`], unlocks publishing.
//! - **The registry lock is never held while callbacks run**: a callback may
//!   subscribe, publish, or freeze on its own signal without deadlock, and a
//!   panicking callback cannot poison signal state.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use crate::config::SignalConfig;
use crate::dispatch::{dispatch_async, dispatch_sync};
use crate::error::{CallbackResult, SignalError};
use crate::subscribers::{BoxCallbackFuture, Callback, SubscriberRegistry, SubscriptionId};

/// Typed publish/subscribe channel.
///
/// Registered callbacks are invoked in subscription order, each receiving its
/// own clone of the payload. Wrap large payloads in `Arc<_>` to make those
/// clones cheap.
///
/// ### Properties
/// - **Thread-safe**: all methods take `&self`; handles are `Send + Sync`.
/// - **Cloneable**: cheap to clone (internally a single `Arc`-backed handle).
/// - **Runtime-agnostic**: the async publish variants are plain sequential
///   awaits, driveable by any executor.
pub struct Signal<T> {
    registry: Arc<SubscriberRegistry<T>>,
}

impl<T> Signal<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Creates a signal with the default configuration (publish anytime).
    ///
    /// The name is a diagnostic label carried into log output and error
    /// messages; it is never used for lookup and need not be unique.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self::with_config(name, SignalConfig::default())
    }

    /// Creates a signal with an explicit [`SignalConfig`].
    ///
    /// # Example
    /// ```
    /// use ezpubsub::{Signal, SignalConfig};
    ///
    /// let signal: Signal<u8> = Signal::with_config("gated", SignalConfig::frozen_only());
    /// signal.subscribe(|_| Ok(()))?;
    ///
    /// assert!(signal.publish(1).unwrap_err().is_not_frozen());
    /// signal.freeze();
    /// signal.publish(1)?;
    /// # Ok::<(), ezpubsub::SignalError>(())
    /// ```
    #[must_use]
    pub fn with_config(name: impl Into<Arc<str>>, config: SignalConfig) -> Self {
        Self {
            registry: Arc::new(SubscriberRegistry::new(name.into(), config)),
        }
    }

    /// Registers a synchronous callback, returning its subscription id.
    ///
    /// The callback runs inline inside `publish` and `apublish_all` calls,
    /// on whichever thread is publishing. Fails with
    /// [`SignalError::FrozenSubscription`] once the signal is frozen.
    ///
    /// # Example
    /// ```
    /// use ezpubsub::Signal;
    ///
    /// let signal: Signal<u32> = Signal::new("ticks");
    /// let id = signal.subscribe(|n| {
    ///     println!("tick {n}");
    ///     Ok(())
    /// })?;
    ///
    /// signal.publish(41)?;
    /// assert!(signal.unsubscribe(id));
    /// # Ok::<(), ezpubsub::SignalError>(())
    /// ```
    pub fn subscribe<F>(&self, f: F) -> Result<SubscriptionId, SignalError>
    where
        F: Fn(T) -> CallbackResult + Send + Sync + 'static,
    {
        self.registry.subscribe(Callback::Sync(Arc::new(f)))
    }

    /// Registers an asynchronous callback, returning its subscription id.
    ///
    /// The callback produces a fresh future per delivery; `apublish` and
    /// `apublish_all` await it to completion before moving to the next
    /// subscriber. The same freeze rule as [`Signal::subscribe`] applies.
    ///
    /// # Example
    /// ```
    /// use ezpubsub::Signal;
    ///
    /// let signal: Signal<String> = Signal::new("greetings");
    /// signal.subscribe_async(|who: String| async move {
    ///     println!("hello, {who}");
    ///     Ok(())
    /// })?;
    ///
    /// futures::executor::block_on(signal.apublish("world".to_string()))?;
    /// # Ok::<(), ezpubsub::SignalError>(())
    /// ```
    pub fn subscribe_async<F, Fut>(&self, f: F) -> Result<SubscriptionId, SignalError>
    where
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = CallbackResult> + Send + 'static,
    {
        let boxed = move |payload: T| -> BoxCallbackFuture { Box::pin(f(payload)) };
        self.registry.subscribe(Callback::Async(Arc::new(boxed)))
    }

    /// Removes a subscriber by id; returns whether anything was removed.
    ///
    /// Unknown or already-removed ids are a no-op. Removal is allowed on a
    /// frozen signal.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.registry.unsubscribe(id)
    }

    /// Publishes a payload to all synchronous subscribers, in order.
    ///
    /// Asynchronous subscribers are skipped: the sync path has no scheduler
    /// to drive them and they remain reachable through [`Signal::apublish`].
    ///
    /// Fails with [`SignalError::NotFrozen`] when the signal requires a
    /// freeze that has not happened yet (checked before any callback runs),
    /// and with [`SignalError::Subscriber`] when a callback returns an error
    /// (remaining subscribers in that call are not invoked).
    pub fn publish(&self, payload: T) -> Result<(), SignalError> {
        self.registry.ensure_publishable()?;
        let snapshot = self.registry.snapshot();
        dispatch_sync(self.registry.name(), &snapshot, &payload)
    }

    /// Publishes a payload to all asynchronous subscribers, in order.
    ///
    /// Each async callback is awaited to completion before the next one
    /// starts; synchronous subscribers are skipped. The call suspends only
    /// at those awaits and never touches a specific runtime, so it can be
    /// driven by `tokio`, `futures::executor::block_on`, or anything else.
    ///
    /// Error behavior matches [`Signal::publish`].
    pub async fn apublish(&self, payload: T) -> Result<(), SignalError> {
        self.registry.ensure_publishable()?;
        let snapshot = self.registry.snapshot();
        dispatch_async(self.registry.name(), snapshot, &payload, false).await
    }

    /// Publishes a payload to all subscribers of both kinds, in order.
    ///
    /// Synchronous subscribers run inline at their own subscription
    /// positions, interleaved with the awaited async ones: with subscription
    /// order `[async a, sync s]`, `a` is awaited to completion and then `s`
    /// runs; with `[sync s, async a]`, `s` runs first.
    ///
    /// Error behavior matches [`Signal::publish`].
    pub async fn apublish_all(&self, payload: T) -> Result<(), SignalError> {
        self.registry.ensure_publishable()?;
        let snapshot = self.registry.snapshot();
        dispatch_async(self.registry.name(), snapshot, &payload, true).await
    }

    /// Permanently blocks new subscriptions.
    ///
    /// Idempotent, and there is no thaw. Publishing keeps working on a
    /// frozen signal; under [`SignalConfig::frozen_only`] it only *starts*
    /// working here.
    pub fn freeze(&self) {
        self.registry.freeze();
    }

    /// True once [`Signal::freeze`] has been called on any handle.
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.registry.is_frozen()
    }

    /// The diagnostic name given at construction.
    #[must_use]
    pub fn name(&self) -> &str {
        self.registry.name()
    }

    /// True if publishing is gated on a prior freeze.
    #[must_use]
    pub fn require_freeze(&self) -> bool {
        self.registry.config().require_freeze
    }

    /// Number of currently registered subscribers (both kinds).
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.registry.len()
    }
}

// Manual impl: clones must be handles to the same channel and must not
// require `T: Clone` at the clone site.
impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("name", &self.registry.name())
            .field("frozen", &self.registry.is_frozen())
            .field("subscribers", &self.registry.len())
            .finish()
    }
}
