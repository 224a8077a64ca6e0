//! End-to-end scenario: a small chat application wiring two signals per
//! participant, exercised from plain threads and from an async context.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;

use ezpubsub::{Signal, SignalError};

#[derive(Clone, Debug)]
struct Message {
    sender: String,
    body: String,
    receiver: String,
}

/// A chat participant: one signal for messages, one for status updates.
struct ChatApp {
    name: String,
    messages: Signal<Message>,
    status: Signal<String>,
}

impl ChatApp {
    fn new(name: &str) -> Self {
        let app = Self {
            name: name.to_string(),
            messages: Signal::new("chat_message"),
            status: Signal::new("user_status"),
        };
        // Every participant prints their own incoming messages.
        let tag = app.name.clone();
        app.messages
            .subscribe(move |m: Message| {
                println!("[{tag}] {}: {}", m.sender, m.body);
                Ok(())
            })
            .expect("fresh signal accepts subscribers");
        app
    }

    async fn send(&self, body: &str) -> Result<(), SignalError> {
        self.messages
            .apublish(Message {
                sender: self.name.clone(),
                body: body.to_string(),
                receiver: "all".to_string(),
            })
            .await
    }

    fn broadcast_status(&self, online: bool) -> Result<(), SignalError> {
        let verb = if online { "joined" } else { "left" };
        self.status
            .publish(format!("{} has {} the chat", self.name, verb))
    }
}

fn current_thread_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("runtime builds")
}

#[test]
fn test_chat_between_threads() {
    let alice = Arc::new(ChatApp::new("Alice"));
    let bob = ChatApp::new("Bob");

    // Bob watches Alice's feed with a sync callback of his own.
    let bob_sees: Arc<Mutex<Vec<String>>> = Arc::default();
    let sink = Arc::clone(&bob_sees);
    alice
        .messages
        .subscribe(move |m: Message| {
            sink.lock().push(m.body);
            Ok(())
        })
        .unwrap();

    alice.broadcast_status(true).unwrap();
    bob.broadcast_status(true).unwrap();

    // Async sends from threads, each with its own runtime. `apublish` skips
    // sync subscribers, so Bob's watcher stays quiet through all of this.
    let handles: Vec<_> = (0..3)
        .map(|i| {
            let alice = Arc::clone(&alice);
            thread::spawn(move || {
                current_thread_runtime().block_on(alice.send(&format!("Thread message {i}")))
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap().unwrap();
    }
    assert!(bob_sees.lock().is_empty());

    alice.messages.freeze();
    assert!(alice.messages.is_frozen());
    assert!(alice
        .messages
        .subscribe(|_| Ok(()))
        .unwrap_err()
        .is_frozen_subscription());

    alice.broadcast_status(false).unwrap();
    bob.broadcast_status(false).unwrap();
}

#[tokio::test]
async fn test_chat_in_async_context() {
    let alice = ChatApp::new("Alice");
    let bob = ChatApp::new("Bob");
    let carol = ChatApp::new("Carol");

    // Carol collects everything from both feeds.
    let inbox: Arc<Mutex<Vec<Message>>> = Arc::default();
    for feed in [&alice.messages, &bob.messages] {
        let inbox = Arc::clone(&inbox);
        feed.subscribe_async(move |m: Message| {
            let inbox = Arc::clone(&inbox);
            async move {
                tokio::time::sleep(Duration::from_millis(10)).await;
                inbox.lock().push(m);
                Ok(())
            }
        })
        .unwrap();
    }

    let (a, b) = tokio::join!(alice.send("Hello from Alice"), bob.send("Hello from Bob"));
    a.unwrap();
    b.unwrap();

    {
        let seen = inbox.lock();
        assert_eq!(seen.len(), 2);
        assert!(seen.iter().any(|m| m.sender == "Alice"));
        assert!(seen.iter().any(|m| m.sender == "Bob"));
        assert!(seen.iter().all(|m| m.receiver == "all"));
    }

    // Freezing blocks subscriptions, not publishing.
    bob.messages.freeze();
    bob.send("This works even with a frozen signal").await.unwrap();
    assert_eq!(inbox.lock().len(), 3);

    let err = bob.messages.subscribe(|_| Ok(())).unwrap_err();
    assert!(err.is_frozen_subscription());

    alice.broadcast_status(false).unwrap();
    bob.broadcast_status(false).unwrap();
    carol.broadcast_status(false).unwrap();
}
