//! # Subscriber storage for signals.
//!
//! This module holds everything a [`Signal`](crate::Signal) knows about its
//! subscribers: the tagged callback representation, the id handles given to
//! callers, and the lock-guarded registry the dispatchers snapshot from.
//!
//! ## Architecture
//! ```text
//! Data flow:
//!   Signal ── subscribe / subscribe_async ──► SubscriberRegistry
//!                                                  │ (ordered list, frozen flag)
//!   Signal ── publish / apublish ── snapshot ──────┘
//!                                      │
//!                                      ▼
//!                          Vec<Subscriber { id, callback }>
//!                                │              │
//!                          Callback::Sync  Callback::Async
//!                          (run inline)    (boxed future, awaited)
//! ```
//!
//! The registry and callback types stay crate-internal; callers interact
//! with them only through [`Signal`](crate::Signal) and keep
//! [`SubscriptionId`] as their handle.

mod registry;
mod subscriber;

#[cfg(feature = "logging")]
mod log;

pub(crate) use registry::SubscriberRegistry;
pub(crate) use subscriber::{BoxCallbackFuture, Callback, Subscriber};

pub use subscriber::SubscriptionId;

#[cfg(feature = "logging")]
pub use log::LogWriter;
