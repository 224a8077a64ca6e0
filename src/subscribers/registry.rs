//! # SubscriberRegistry: ordered, lock-guarded subscriber storage.
//!
//! [`SubscriberRegistry`] owns the mutable state of a signal: the ordered
//! subscriber list, the one-way frozen flag, and the id counter. A single
//! `RwLock` guards all three.
//!
//! ## What it guarantees
//! - Subscribers are stored (and later dispatched) in subscription order.
//! - `freeze()` is terminal: once set, the flag never clears, and the
//!   check-and-append in `subscribe` is atomic under the write lock, so a
//!   racing freeze either sees the new subscriber or rejects it cleanly.
//! - The lock is held only to mutate or copy state, never while a callback
//!   runs: dispatch works off `snapshot()`, an owned copy of the list.
//!
//! ## Diagram
//! ```text
//!    subscribe ──┐
//!  unsubscribe ──┼──► RwLock<RegistryInner> { subscribers, frozen, next_id }
//!       freeze ──┘              │
//!                               └─ snapshot() ─► Vec<Subscriber<T>> ─► dispatch
//! ```

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::SignalConfig;
use crate::error::SignalError;

use super::{Callback, Subscriber, SubscriptionId};

/// Mutable state behind the registry lock.
struct RegistryInner<T> {
    subscribers: Vec<Subscriber<T>>,
    frozen: bool,
    next_id: u64,
}

/// Ordered subscriber storage shared by every clone of a signal.
pub(crate) struct SubscriberRegistry<T> {
    name: Arc<str>,
    config: SignalConfig,
    inner: RwLock<RegistryInner<T>>,
}

impl<T> SubscriberRegistry<T> {
    pub(crate) fn new(name: Arc<str>, config: SignalConfig) -> Self {
        Self {
            name,
            config,
            inner: RwLock::new(RegistryInner {
                subscribers: Vec::new(),
                frozen: false,
                next_id: 0,
            }),
        }
    }

    /// Name the signal was created with.
    #[inline]
    pub(crate) fn name(&self) -> &Arc<str> {
        &self.name
    }

    #[inline]
    pub(crate) fn config(&self) -> SignalConfig {
        self.config
    }

    /// Appends a callback to the list, returning its new id.
    ///
    /// Fails with [`SignalError::FrozenSubscription`] once the registry is
    /// frozen. Ids come from a monotonic counter and are never reused, so a
    /// stale id held after `unsubscribe` can never remove a newer subscriber.
    pub(crate) fn subscribe(&self, callback: Callback<T>) -> Result<SubscriptionId, SignalError> {
        let mut inner = self.inner.write();
        if inner.frozen {
            return Err(SignalError::FrozenSubscription {
                signal: Arc::clone(&self.name),
            });
        }
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.subscribers.push(Subscriber { id, callback });
        Ok(id)
    }

    /// Removes the subscriber registered under `id`; true if it was present.
    ///
    /// Freezing does not gate removal: the frozen flag blocks additions and
    /// (optionally) publishing, shrinking the set is always allowed.
    pub(crate) fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.write();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|sub| sub.id != id);
        inner.subscribers.len() != before
    }

    /// Marks the registry frozen. Idempotent; there is no thaw.
    pub(crate) fn freeze(&self) {
        self.inner.write().frozen = true;
    }

    #[inline]
    pub(crate) fn is_frozen(&self) -> bool {
        self.inner.read().frozen
    }

    /// Checks the freeze gate that applies to every publish variant.
    ///
    /// The flag is monotonic, so once this returns `Ok` it stays `Ok` for
    /// the lifetime of the signal.
    pub(crate) fn ensure_publishable(&self) -> Result<(), SignalError> {
        if self.config.require_freeze && !self.is_frozen() {
            return Err(SignalError::NotFrozen {
                signal: Arc::clone(&self.name),
            });
        }
        Ok(())
    }

    /// Owned copy of the current subscriber list, in subscription order.
    ///
    /// Clones are `Arc` bumps only. The in-flight dispatch that consumes the
    /// copy is isolated from concurrent `subscribe`/`unsubscribe` calls.
    pub(crate) fn snapshot(&self) -> Vec<Subscriber<T>> {
        self.inner.read().subscribers.clone()
    }

    /// Number of currently registered subscribers.
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.inner.read().subscribers.len()
    }
}
