//! # Example: freeze_lifecycle
//!
//! Walkthrough of the one-way freeze lifecycle and `require_freeze` gating.
//! Sync subscribers only, so no async runtime is involved at all.
//!
//! Demonstrates how to:
//! - Gate publishing on a prior [`Signal::freeze`] with [`SignalConfig`].
//! - Read the stable error labels for logs.
//! - Rely on freeze being idempotent and terminal.
//!
//! ## Flow
//! ```text
//! Signal::with_config("orders", SignalConfig::frozen_only())
//!     ├─► subscribe(printer)     ok (not frozen yet)
//!     ├─► publish(order)         Err(NotFrozen)            gate closed
//!     ├─► freeze()               subscriber set final, gate open
//!     ├─► publish(order)         ok
//!     ├─► subscribe(late)        Err(FrozenSubscription)   forever
//!     └─► freeze(); publish      still ok, freeze is idempotent
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example freeze_lifecycle
//! ```

use ezpubsub::{Signal, SignalConfig};

#[derive(Clone, Debug)]
struct Order {
    id: u32,
    item: String,
    quantity: u32,
}

impl Order {
    fn new(id: u32, item: &str, quantity: u32) -> Self {
        Self {
            id,
            item: item.to_string(),
            quantity,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let orders: Signal<Order> = Signal::with_config("orders", SignalConfig::frozen_only());

    orders.subscribe(|o: Order| {
        println!("[orders] #{} {} x{}", o.id, o.item, o.quantity);
        Ok(())
    })?;

    // Publishing before the freeze is rejected; nothing is delivered.
    match orders.publish(Order::new(1, "keyboard", 2)) {
        Err(err) if err.is_not_frozen() => {
            println!("[demo] rejected ({}): {err}", err.as_label());
        }
        other => anyhow::bail!("expected the freeze gate to reject, got {other:?}"),
    }

    // One-way transition: after this the subscriber set is final.
    orders.freeze();
    assert!(orders.is_frozen());

    orders.publish(Order::new(2, "keyboard", 2))?;
    orders.publish(Order::new(3, "mouse", 1))?;

    // Late subscribers are refused forever.
    match orders.subscribe(|_| Ok(())) {
        Err(err) if err.is_frozen_subscription() => {
            println!("[demo] late subscriber refused ({})", err.as_label());
        }
        other => anyhow::bail!("expected a frozen-subscription error, got {other:?}"),
    }

    // Freezing again changes nothing; publishing keeps working.
    orders.freeze();
    orders.publish(Order::new(4, "monitor", 1))?;
    Ok(())
}
