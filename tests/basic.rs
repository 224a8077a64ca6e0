//! Everyday usage flows: one signal, one payload type, sync and async
//! subscribers, error propagation, unsubscription.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use ezpubsub::{Signal, SignalError};

#[derive(Clone, Debug, PartialEq)]
struct Profile {
    name: String,
    age: u32,
    coolness: f64,
    ready: bool,
}

#[test]
fn test_sync_subscriber_receives_payload() {
    let signal: Signal<Profile> = Signal::new("profiles");
    let deliveries = Arc::new(AtomicUsize::new(0));

    let seen = Arc::clone(&deliveries);
    signal
        .subscribe(move |p| {
            assert_eq!(p.name, "Alice");
            assert_eq!(p.age, 30);
            assert_eq!(p.coolness, 9.5);
            assert!(p.ready);
            seen.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
        .unwrap();

    signal
        .publish(Profile {
            name: "Alice".into(),
            age: 30,
            coolness: 9.5,
            ready: true,
        })
        .unwrap();

    assert_eq!(deliveries.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_async_subscriber_receives_payload() {
    let signal: Signal<Profile> = Signal::new("profiles_async");
    let deliveries = Arc::new(AtomicUsize::new(0));

    let seen = Arc::clone(&deliveries);
    signal
        .subscribe_async(move |p: Profile| {
            let seen = Arc::clone(&seen);
            async move {
                tokio::time::sleep(Duration::from_millis(10)).await;
                assert_eq!(p.name, "Bob");
                assert_eq!(p.age, 25);
                assert_eq!(p.coolness, 8.0);
                assert!(!p.ready);
                seen.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
        })
        .unwrap();

    signal
        .apublish(Profile {
            name: "Bob".into(),
            age: 25,
            coolness: 8.0,
            ready: false,
        })
        .await
        .unwrap();

    assert_eq!(deliveries.load(Ordering::SeqCst), 1);
}

/// A failing callback aborts the call: earlier subscribers ran, later ones
/// never start, and the error names the failing subscription.
#[test]
fn test_callback_error_stops_remaining_subscribers() {
    let signal: Signal<u32> = Signal::new("aborting");
    let ran_first = Arc::new(AtomicUsize::new(0));
    let ran_last = Arc::new(AtomicUsize::new(0));

    let c = Arc::clone(&ran_first);
    signal
        .subscribe(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
        .unwrap();
    let failing = signal.subscribe(|_| Err("refused to process".into())).unwrap();
    let c = Arc::clone(&ran_last);
    signal
        .subscribe(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
        .unwrap();

    let err = signal.publish(7).unwrap_err();
    match err {
        SignalError::Subscriber { subscription, .. } => assert_eq!(subscription, failing),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(ran_first.load(Ordering::SeqCst), 1);
    assert_eq!(
        ran_last.load(Ordering::SeqCst),
        0,
        "dispatch must stop at the failing subscriber"
    );
}

#[test]
fn test_unsubscribe_stops_delivery() {
    let signal: Signal<u32> = Signal::new("forgetful");
    let count = Arc::new(AtomicUsize::new(0));

    let c = Arc::clone(&count);
    let id = signal
        .subscribe(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
        .unwrap();

    signal.publish(1).unwrap();
    assert!(signal.unsubscribe(id));
    signal.publish(2).unwrap();

    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert!(!signal.unsubscribe(id), "stale id must be a no-op");
    assert_eq!(signal.subscriber_count(), 0);
}

#[test]
fn test_publish_with_no_subscribers_is_fine() {
    let signal: Signal<&'static str> = Signal::new("empty");
    signal.publish("nobody listens").unwrap();
    assert_eq!(signal.subscriber_count(), 0);
}

#[cfg(feature = "logging")]
#[test]
fn test_log_writer_attaches_like_any_subscriber() {
    use ezpubsub::LogWriter;

    let signal: Signal<String> = Signal::new("logged");
    LogWriter::attach(&signal).unwrap();
    assert_eq!(signal.subscriber_count(), 1);
    signal.publish("payload".to_string()).unwrap();

    signal.freeze();
    assert!(LogWriter::attach(&signal).unwrap_err().is_frozen_subscription());
}
