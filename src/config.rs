//! # Per-signal configuration.
//!
//! [`SignalConfig`] defines how a [`Signal`](crate::Signal) gates its
//! lifecycle: whether publishing requires the subscriber set to be frozen
//! first.
//!
//! # Example
//! ```
//! use ezpubsub::SignalConfig;
//!
//! let mut cfg = SignalConfig::default();
//! cfg.require_freeze = true;
//!
//! assert!(cfg.require_freeze);
//! ```

/// Configuration for a single signal.
///
/// Controls the freeze-gating behavior of publish operations. Freezing
/// itself is always available and always one-way; this only decides whether
/// a publish is *rejected* while the signal is still mutable.
#[derive(Clone, Copy, Debug, Default)]
pub struct SignalConfig {
    /// Reject publishing until `freeze()` has been called.
    ///
    /// Useful for setup-then-run systems: subscribe everything during
    /// startup, freeze, then publish from many threads knowing the
    /// subscriber set is complete. Defaults to `false` (publish anytime).
    pub require_freeze: bool,
}

impl SignalConfig {
    /// Configuration that rejects publishing on a non-frozen signal.
    ///
    /// Shorthand for setting [`SignalConfig::require_freeze`] by hand.
    #[must_use]
    pub fn frozen_only() -> Self {
        Self { require_freeze: true }
    }
}
