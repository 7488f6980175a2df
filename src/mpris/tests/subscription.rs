use std::time::Duration;

use futures::StreamExt;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use super::mock::{Call, MockTransport};
use crate::{
    config::ClientConfig,
    mpris::{
        MprisError, Player, PositionStream, RawSignal, SignalFilter, Value,
        protocol::{OBJECT_PATH, PLAYER_INTERFACE, player},
    },
};

const NAME: &str = "org.mpris.MediaPlayer2.mock";
const WAIT: Duration = Duration::from_secs(1);

fn signal(name: &str, body: Vec<Value>) -> RawSignal {
    RawSignal {
        sender: Some(":1.42".to_string()),
        path: Some(OBJECT_PATH.to_string()),
        name: name.to_string(),
        body,
    }
}

async fn next_position(positions: &mut PositionStream) -> Option<i64> {
    timeout(WAIT, positions.next())
        .await
        .expect("stream neither yielded nor closed")
}

#[tokio::test]
async fn forwards_only_well_formed_seeked_signals() {
    let (transport, signals) = MockTransport::new();
    let player = Player::with_transport(NAME, transport);
    let cancel = CancellationToken::new();

    let mut positions = player
        .subscribe_to_position_changes(cancel.clone())
        .await
        .unwrap();

    signals.send(signal(player::SEEKED, vec![Value::I64(1111)])).unwrap();
    signals
        .send(signal("org.mpris.MediaPlayer2.Player.Unknown", vec![Value::I64(2222)]))
        .unwrap();
    signals
        .send(signal(player::SEEKED, vec![Value::I64(3333), Value::I64(3333)]))
        .unwrap();
    signals.send(signal(player::SEEKED, vec![Value::from("4444444")])).unwrap();
    signals.send(signal(player::SEEKED, vec![Value::I64(55_555_555)])).unwrap();

    assert_eq!(next_position(&mut positions).await, Some(1111));
    assert_eq!(next_position(&mut positions).await, Some(55_555_555));

    cancel.cancel();
    assert_eq!(next_position(&mut positions).await, None);
}

#[tokio::test]
async fn registers_seeked_filter_for_the_player() {
    let (transport, _signals) = MockTransport::new();
    let player = Player::with_transport(NAME, transport);

    let _positions = player
        .subscribe_to_position_changes(CancellationToken::new())
        .await
        .unwrap();

    let filter = SignalFilter {
        sender: NAME.to_string(),
        path: OBJECT_PATH.to_string(),
        interface: PLAYER_INTERFACE.to_string(),
        member: Some("Seeked".to_string()),
    };
    assert_eq!(
        player.transport().calls(),
        vec![Call::AddMatch(filter.clone()), Call::Signals(filter)]
    );
}

#[tokio::test]
async fn nothing_is_emitted_after_cancellation() {
    let (transport, signals) = MockTransport::new();
    let player = Player::with_transport(NAME, transport);
    let cancel = CancellationToken::new();

    let mut positions = player
        .subscribe_to_position_changes(cancel.clone())
        .await
        .unwrap();

    signals.send(signal(player::SEEKED, vec![Value::I64(1)])).unwrap();
    assert_eq!(next_position(&mut positions).await, Some(1));

    cancel.cancel();
    let _ = signals.send(signal(player::SEEKED, vec![Value::I64(2)]));
    let _ = signals.send(signal(player::SEEKED, vec![Value::I64(3)]));

    assert_eq!(next_position(&mut positions).await, None);
    assert_eq!(next_position(&mut positions).await, None);
}

#[tokio::test]
async fn buffered_positions_are_dropped_on_cancellation() {
    let (transport, signals) = MockTransport::new();
    let config = ClientConfig {
        signal_buffer: 8,
        ..ClientConfig::default()
    };
    let player = Player::with_transport_and_config(NAME, transport, &config);
    let cancel = CancellationToken::new();

    let mut positions = player
        .subscribe_to_position_changes(cancel.clone())
        .await
        .unwrap();

    signals.send(signal(player::SEEKED, vec![Value::I64(10)])).unwrap();
    signals.send(signal(player::SEEKED, vec![Value::I64(20)])).unwrap();
    assert_eq!(next_position(&mut positions).await, Some(10));

    cancel.cancel();

    assert_eq!(next_position(&mut positions).await, None);
}

#[tokio::test]
async fn stream_ends_with_its_source() {
    let (transport, signals) = MockTransport::new();
    let player = Player::with_transport(NAME, transport);

    let mut positions = player
        .subscribe_to_position_changes(CancellationToken::new())
        .await
        .unwrap();

    signals.send(signal(player::SEEKED, vec![Value::I64(7)])).unwrap();
    drop(signals);

    assert_eq!(next_position(&mut positions).await, Some(7));
    assert_eq!(next_position(&mut positions).await, None);
}

#[tokio::test]
async fn failed_match_registration_never_listens() {
    let (transport, _signals) = MockTransport::new();
    let player = Player::with_transport(NAME, transport.failing_match());

    let result = player
        .subscribe_to_position_changes(CancellationToken::new())
        .await;

    let Err(error) = result else {
        panic!("subscription should fail");
    };
    assert!(matches!(error, MprisError::SubscriptionFailed(_)));
    assert!(error.to_string().starts_with("failed to add signal match option: "));
    assert_eq!(player.transport().signals_calls(), 0);
}

#[tokio::test]
async fn dropping_the_stream_releases_the_signal_queue() {
    let (transport, signals) = MockTransport::new();
    let player = Player::with_transport(NAME, transport);

    let positions = player
        .subscribe_to_position_changes(CancellationToken::new())
        .await
        .unwrap();
    drop(positions);

    timeout(WAIT, signals.closed())
        .await
        .expect("listen loop kept the signal queue after the stream was dropped");
    assert!(signals.send(signal(player::SEEKED, vec![Value::I64(1)])).is_err());
}

#[tokio::test]
async fn cancellation_releases_the_signal_queue() {
    let (transport, signals) = MockTransport::new();
    let player = Player::with_transport(NAME, transport);
    let cancel = CancellationToken::new();

    let mut positions = player
        .subscribe_to_position_changes(cancel.clone())
        .await
        .unwrap();
    cancel.cancel();

    timeout(WAIT, signals.closed())
        .await
        .expect("listen loop kept the signal queue after cancellation");
    assert_eq!(next_position(&mut positions).await, None);
}
