//! # ezpubsub
//!
//! **ezpubsub** is a small, typed publish/subscribe library for Rust.
//!
//! It provides [`Signal`], a thread-safe channel that delivers each published
//! payload to its subscribers in subscription order. Signals accept both
//! synchronous callbacks and async ones, and offer a one-way freeze
//! lifecycle for setup-then-run systems: subscribe everything during
//! startup, freeze, then publish concurrently without ever wondering
//! whether the subscriber set is still changing.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!  Callers (any thread / any runtime)       Signal<T> (cloneable handle)
//!    subscribe(f) ──────────────┐
//!    subscribe_async(f) ────────┼────► SubscriberRegistry (single RwLock)
//!    freeze() ──────────────────┘        { ordered subscribers, frozen, next_id }
//!                                                  │
//!    publish(p) ─────────────┐                     │ snapshot (lock released
//!    apublish(p) ────────────┼─────────────────────┘  before callbacks run)
//!    apublish_all(p) ────────┘                     │
//!                                                  ▼
//!                                    [ s1, s2, ... ] in subscription order
//!                                         │
//!                                         ├─ Callback::Sync  ─► run inline
//!                                         └─ Callback::Async ─► await, one at a time
//! ```
//!
//! ### Lifecycle
//! ```text
//! Signal::new(name) or Signal::with_config(name, cfg)
//!    │
//!    ├─► subscribe / subscribe_async      (rejected once frozen)
//!    ├─► freeze()                         (one-way, idempotent)
//!    │
//!    └─► publish / apublish / apublish_all
//!           │
//!           ├─ cfg.require_freeze && !frozen ─► Err(NotFrozen), nothing runs
//!           ├─ snapshot the registry
//!           └─ deliver in subscription order, payload cloned per subscriber
//!                ├─ publish:      sync subscribers only (async skipped)
//!                ├─ apublish:     async subscribers only, awaited one at a time
//!                ├─ apublish_all: both kinds, interleaved at their positions
//!                └─ first Err aborts the call ─► Err(Subscriber)
//! ```
//!
//! ## Features
//! | Area          | Description                                                      | Key types / methods                            |
//! |---------------|------------------------------------------------------------------|------------------------------------------------|
//! | **Signals**   | Typed channels with ordered, clone-per-subscriber delivery.      | [`Signal`]                                     |
//! | **Async**     | Sequentially awaited async subscribers; no runtime dependency.   | [`Signal::subscribe_async`], [`Signal::apublish`] |
//! | **Lifecycle** | One-way freeze, optional freeze-gated publishing.                | [`Signal::freeze`], [`SignalConfig`]           |
//! | **Errors**    | Typed errors with stable labels; fallible callbacks.             | [`SignalError`], [`CallbackResult`]            |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use ezpubsub::Signal;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let updates: Signal<String> = Signal::new("updates");
//!
//!     updates.subscribe(|text| {
//!         println!("got: {text}");
//!         Ok(())
//!     })?;
//!     updates.subscribe_async(|text: String| async move {
//!         println!("got (async): {text}");
//!         Ok(())
//!     })?;
//!
//!     // Subscriber set is final from here on.
//!     updates.freeze();
//!
//!     updates.publish("sync delivery".to_string())?;
//!     updates.apublish_all("both kinds".to_string()).await?;
//!     Ok(())
//! }
//! ```
mod config;
mod dispatch;
mod error;
mod signal;
mod subscribers;

// ---- Public re-exports ----

pub use config::SignalConfig;
pub use error::{CallbackError, CallbackResult, SignalError};
pub use signal::Signal;
pub use subscribers::SubscriptionId;

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
