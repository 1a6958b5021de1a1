//! Fan-out relay behavior (sender-exclusion, disconnect, failure isolation).

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::extract::ws::Message;
use tokio::sync::mpsc;

use msgrelay_gateway::relay::RelayCore;

fn text(msg: Message) -> String {
    match msg {
        Message::Text(s) => s,
        other => panic!("expected text frame, got {other:?}"),
    }
}

const FRAME: &str = r#"{"event":"message:receive","data":{"text":"hi"}}"#;

#[tokio::test]
async fn event_reaches_everyone_but_the_sender() {
    let relay = RelayCore::new();

    let (tx_a, mut rx_a) = mpsc::channel(8);
    let (tx_b, mut rx_b) = mpsc::channel(8);
    let (tx_c, mut rx_c) = mpsc::channel(8);

    let a = relay.connect(tx_a);
    let _b = relay.connect(tx_b);
    let _c = relay.connect(tx_c);
    assert_eq!(relay.active_sessions(), 3);

    let delivered = relay.broadcast_from(a, FRAME);
    assert_eq!(delivered, 2);

    assert_eq!(text(rx_b.recv().await.unwrap()), FRAME);
    assert_eq!(text(rx_c.recv().await.unwrap()), FRAME);
    // sender-exclusion: nothing queued back to A
    assert!(rx_a.try_recv().is_err());
}

#[tokio::test]
async fn disconnected_session_is_not_a_fanout_target() {
    let relay = RelayCore::new();

    let (tx_a, _rx_a) = mpsc::channel(8);
    let (tx_b, mut rx_b) = mpsc::channel(8);
    let (tx_c, mut rx_c) = mpsc::channel(8);

    let a = relay.connect(tx_a);
    let b = relay.connect(tx_b);
    let _c = relay.connect(tx_c);

    relay.disconnect(b);
    assert_eq!(relay.active_sessions(), 2);

    let delivered = relay.broadcast_from(a, FRAME);
    assert_eq!(delivered, 1);
    assert_eq!(text(rx_c.recv().await.unwrap()), FRAME);
    assert!(rx_b.try_recv().is_err());
}

#[tokio::test]
async fn full_recipient_queue_does_not_abort_the_rest() {
    let relay = RelayCore::new();

    let (tx_a, _rx_a) = mpsc::channel(8);
    // B's queue has capacity 1 and is pre-filled, so delivery to it fails
    let (tx_b, mut rx_b) = mpsc::channel(1);
    tx_b.try_send(Message::Ping(Vec::new())).unwrap();
    let (tx_c, mut rx_c) = mpsc::channel(8);

    let a = relay.connect(tx_a);
    let _b = relay.connect(tx_b);
    let _c = relay.connect(tx_c);

    let delivered = relay.broadcast_from(a, FRAME);
    assert_eq!(delivered, 1);
    assert_eq!(text(rx_c.recv().await.unwrap()), FRAME);

    // B only ever got the pre-fill; the frame was dropped, not queued
    assert!(matches!(rx_b.try_recv(), Ok(Message::Ping(_))));
    assert!(rx_b.try_recv().is_err());
}

#[tokio::test]
async fn closed_recipient_is_skipped() {
    let relay = RelayCore::new();

    let (tx_a, _rx_a) = mpsc::channel(8);
    let (tx_b, rx_b) = mpsc::channel(8);
    let (tx_c, mut rx_c) = mpsc::channel(8);

    let a = relay.connect(tx_a);
    let _b = relay.connect(tx_b);
    let _c = relay.connect(tx_c);

    // B's socket side went away without a disconnect yet
    drop(rx_b);

    let delivered = relay.broadcast_from(a, FRAME);
    assert_eq!(delivered, 1);
    assert_eq!(text(rx_c.recv().await.unwrap()), FRAME);
}

#[tokio::test]
async fn double_disconnect_is_harmless() {
    let relay = RelayCore::new();
    let (tx_a, _rx_a) = mpsc::channel(8);
    let a = relay.connect(tx_a);

    relay.disconnect(a);
    relay.disconnect(a);
    assert_eq!(relay.active_sessions(), 0);
}
