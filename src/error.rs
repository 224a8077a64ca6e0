//! Error types for signal subscription and publication.
//!
//! This module defines:
//!
//! - [`SignalError`] — errors raised by [`Signal`](crate::Signal) operations
//!   (freeze-gating violations and subscriber failures).
//! - [`CallbackError`] / [`CallbackResult`] — the error surface of subscriber
//!   callbacks themselves.
//!
//! Freeze-gating errors ([`SignalError::FrozenSubscription`],
//! [`SignalError::NotFrozen`]) are detected before any subscriber runs, so a
//! rejected call never produces a partial dispatch. A
//! [`SignalError::Subscriber`] error means dispatch stopped at the named
//! subscription: earlier subscribers ran, later ones were not invoked.

use std::sync::Arc;

use thiserror::Error;

use crate::subscribers::SubscriptionId;

/// Boxed error a subscriber callback may return.
///
/// Any error type converts into it with `?` or `.into()`, including plain
/// strings:
///
/// ```
/// use ezpubsub::CallbackResult;
///
/// fn checked(input: &str) -> CallbackResult {
///     if input.is_empty() {
///         return Err("empty payload".into());
///     }
///     Ok(())
/// }
///
/// assert!(checked("hello").is_ok());
/// ```
pub type CallbackError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type returned by subscriber callbacks.
///
/// Infallible callbacks simply end with `Ok(())`.
pub type CallbackResult = Result<(), CallbackError>;

/// # Errors produced by signal operations.
///
/// The freeze-gating variants carry the signal name for diagnostics; the
/// [`SignalError::Subscriber`] variant additionally carries the failing
/// [`SubscriptionId`] and the callback's error as its source.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum SignalError {
    /// Subscription was attempted after the signal was frozen.
    ///
    /// Freezing is terminal: once a signal is frozen, no subscriber can ever
    /// be added again, regardless of how the signal was configured.
    #[error("cannot subscribe to frozen signal \"{signal}\"")]
    FrozenSubscription {
        /// Name of the signal that rejected the subscription.
        signal: Arc<str>,
    },

    /// Publish was attempted before `freeze` on a signal constructed with
    /// `require_freeze`.
    #[error(
        "cannot publish on non-frozen signal \"{signal}\": \
         call freeze() first or construct the signal without require_freeze"
    )]
    NotFrozen {
        /// Name of the signal that rejected the publish.
        signal: Arc<str>,
    },

    /// A subscriber callback returned an error during dispatch.
    ///
    /// Remaining subscribers in that call were not invoked; the callback's
    /// own error is available through [`std::error::Error::source`].
    #[error("subscriber #{subscription} failed on signal \"{signal}\": {source}")]
    Subscriber {
        /// Name of the signal being published.
        signal: Arc<str>,
        /// Id of the subscription whose callback failed.
        subscription: SubscriptionId,
        /// The error the callback returned.
        #[source]
        source: CallbackError,
    },
}

impl SignalError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use ezpubsub::SignalError;
    ///
    /// let err = SignalError::FrozenSubscription { signal: "updates".into() };
    /// assert_eq!(err.as_label(), "frozen_subscription");
    ///
    /// let err = SignalError::NotFrozen { signal: "updates".into() };
    /// assert_eq!(err.as_label(), "not_frozen");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            SignalError::FrozenSubscription { .. } => "frozen_subscription",
            SignalError::NotFrozen { .. } => "not_frozen",
            SignalError::Subscriber { .. } => "subscriber_failed",
        }
    }

    /// Returns the name of the signal the error originated from.
    pub fn signal(&self) -> &str {
        match self {
            SignalError::FrozenSubscription { signal }
            | SignalError::NotFrozen { signal }
            | SignalError::Subscriber { signal, .. } => signal,
        }
    }

    /// True if this is a [`SignalError::FrozenSubscription`].
    pub fn is_frozen_subscription(&self) -> bool {
        matches!(self, SignalError::FrozenSubscription { .. })
    }

    /// True if this is a [`SignalError::NotFrozen`].
    ///
    /// Freezing is one-way, so once any publish has succeeded this error
    /// can never be observed again on the same signal.
    pub fn is_not_frozen(&self) -> bool {
        matches!(self, SignalError::NotFrozen { .. })
    }
}
