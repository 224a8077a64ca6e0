//! # Example: chat
//!
//! A miniature chat room built from two signals: a typed message feed and a
//! plain-text status feed.
//!
//! Demonstrates how to:
//! - Carry a typed payload struct through [`Signal`].
//! - Mix sync subscribers (console printer) with async ones (slow archive).
//! - Publish concurrently with `apublish_all` and freeze the feed afterward.
//!
//! ## Flow
//! ```text
//! main
//!     ├─► feed: Signal<ChatMessage> (require_freeze)
//!     │      ├─ subscribe(console printer)        (sync)
//!     │      └─ subscribe_async(archive writer)   (async, simulated delay)
//!     ├─► status: Signal<String>
//!     │      └─ subscribe(console printer)        (sync)
//!     │
//!     ├─► status.publish("... joined")
//!     ├─► feed.freeze()               subscriber set is final, gate opens
//!     ├─► join!(alice says hi, bob replies)
//!     │        └─ apublish_all ──► printer + archive, in subscription order
//!     └─► late subscribe ──► rejected; sending still works
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example chat
//! ```

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use ezpubsub::{Signal, SignalConfig, SignalError};

#[derive(Clone, Debug)]
struct ChatMessage {
    sender: String,
    body: String,
}

async fn send(feed: &Signal<ChatMessage>, who: &str, body: &str) -> Result<(), SignalError> {
    feed.apublish_all(ChatMessage {
        sender: who.to_string(),
        body: body.to_string(),
    })
    .await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1. One feed for messages, one for member status. The feed requires a
    //    freeze so nobody can sneak in a subscriber once chat is running.
    let feed: Signal<ChatMessage> = Signal::with_config("chat_feed", SignalConfig::frozen_only());
    let status: Signal<String> = Signal::new("chat_status");

    // 2. Console printer (sync): runs inline on whichever task publishes.
    feed.subscribe(|m: ChatMessage| {
        println!("[feed] {}: {}", m.sender, m.body);
        Ok(())
    })?;

    // 3. Archive writer (async): awaited per message, with a storage delay.
    let archive: Arc<Mutex<Vec<String>>> = Arc::default();
    let store = Arc::clone(&archive);
    feed.subscribe_async(move |m: ChatMessage| {
        let store = Arc::clone(&store);
        async move {
            tokio::time::sleep(Duration::from_millis(25)).await;
            store.lock().push(format!("{}: {}", m.sender, m.body));
            Ok(())
        }
    })?;

    // 4. Status updates are ungated pub/sub.
    status.subscribe(|line: String| {
        println!("[status] {line}");
        Ok(())
    })?;

    status.publish("alice joined".to_string())?;
    status.publish("bob joined".to_string())?;

    // 5. Setup done: freeze the feed, then publish freely from anywhere.
    feed.freeze();

    let (a, b) = tokio::join!(
        send(&feed, "alice", "hi all"),
        send(&feed, "bob", "hey alice"),
    );
    a?;
    b?;

    // 6. Frozen means no new subscribers, not no new messages.
    if let Err(err) = feed.subscribe(|_| Ok(())) {
        println!("[demo] late subscriber rejected: {err}");
    }
    send(&feed, "alice", "see you").await?;

    status.publish("alice left".to_string())?;
    println!("[demo] archived {} messages", archive.lock().len());
    Ok(())
}
