use std::collections::HashMap;

use super::mock::{Call, MockTransport};
use crate::{
    config::ClientConfig,
    mpris::{
        LoopStatus, MprisError, ObjectPath, PlaybackStatus, Player, TypeMismatch, Value,
        protocol::{OBJECT_PATH, metadata as keys, player},
    },
};

const NAME: &str = "org.mpris.MediaPlayer2.mock";

fn player_with(transport: MockTransport) -> Player<MockTransport> {
    Player::with_transport(NAME, transport)
}

fn method(name: &str, args: Vec<Value>) -> Call {
    Call::Method {
        destination: NAME.to_string(),
        path: OBJECT_PATH.to_string(),
        method: name.to_string(),
        args,
    }
}

fn get(property: &str) -> Call {
    Call::Get {
        destination: NAME.to_string(),
        path: OBJECT_PATH.to_string(),
        property: property.to_string(),
    }
}

#[tokio::test]
async fn argumentless_controls_issue_one_call_each() {
    let (transport, _signals) = MockTransport::new();
    let player = player_with(transport);

    player.next().await;
    player.previous().await;
    player.pause().await;
    player.play_pause().await;
    player.stop().await;
    player.play().await;

    assert_eq!(
        player.transport().calls(),
        vec![
            method(player::NEXT, Vec::new()),
            method(player::PREVIOUS, Vec::new()),
            method(player::PAUSE, Vec::new()),
            method(player::PLAY_PAUSE, Vec::new()),
            method(player::STOP, Vec::new()),
            method(player::PLAY, Vec::new()),
        ]
    );
}

#[tokio::test]
async fn seek_to_passes_offset() {
    let (transport, _signals) = MockTransport::new();
    let player = player_with(transport);

    player.seek_to(12_356_789).await;

    assert_eq!(
        player.transport().calls(),
        vec![method(
            "org.mpris.MediaPlayer2.Player.SeekTo",
            vec![Value::I64(12_356_789)]
        )]
    );
}

#[tokio::test]
async fn set_position_passes_track_then_position() {
    let (transport, _signals) = MockTransport::new();
    let player = player_with(transport);

    player.set_position("/my/path", 123_456_789).await;

    assert_eq!(
        player.transport().calls(),
        vec![method(
            "org.mpris.MediaPlayer2.Player.SetPosition",
            vec![
                Value::ObjectPath(ObjectPath::new("/my/path")),
                Value::I64(123_456_789)
            ]
        )]
    );
}

#[tokio::test]
async fn open_uri_passes_uri() {
    let (transport, _signals) = MockTransport::new();
    let player = player_with(transport);

    player.open_uri("file://my/uri").await;

    assert_eq!(
        player.transport().calls(),
        vec![method(
            "org.mpris.MediaPlayer2.Player.OpenUri",
            vec![Value::from("file://my/uri")]
        )]
    );
}

#[tokio::test]
async fn failed_controls_are_not_surfaced() {
    let (transport, _signals) = MockTransport::new();
    let player = player_with(transport.failing_methods());

    player.play().await;
    player.seek_to(-5).await;

    assert_eq!(player.transport().calls().len(), 2);
}

#[tokio::test]
async fn reads_typed_properties() {
    let (transport, _signals) = MockTransport::new();
    let transport = transport
        .with_property(player::PLAYBACK_STATUS, "Paused")
        .with_property(player::LOOP_STATUS, "Playlist")
        .with_property(player::RATE, 1.5)
        .with_property(player::SHUFFLE, true)
        .with_property(player::VOLUME, 0.25)
        .with_property(player::POSITION, 4_000_000_i64)
        .with_property(player::MINIMUM_RATE, 0.5)
        .with_property(player::MAXIMUM_RATE, 2.0)
        .with_property(player::CAN_SEEK, true);
    let player = player_with(transport);

    assert_eq!(player.playback_status().await.unwrap(), PlaybackStatus::Paused);
    assert_eq!(player.loop_status().await.unwrap(), LoopStatus::Playlist);
    assert_eq!(player.rate().await.unwrap(), 1.5);
    assert!(player.shuffle().await.unwrap());
    assert_eq!(player.volume().await.unwrap(), 0.25);
    assert_eq!(player.position().await.unwrap(), 4_000_000);
    assert_eq!(player.minimum_rate().await.unwrap(), 0.5);
    assert_eq!(player.maximum_rate().await.unwrap(), 2.0);
    assert!(player.can_seek().await.unwrap());

    assert_eq!(player.transport().calls()[0], get(player::PLAYBACK_STATUS));
}

#[tokio::test]
async fn absent_properties_read_as_defaults() {
    let (transport, _signals) = MockTransport::new();
    let player = player_with(transport);

    assert_eq!(player.playback_status().await.unwrap(), PlaybackStatus::Stopped);
    assert_eq!(player.loop_status().await.unwrap(), LoopStatus::None);
    assert!(!player.can_go_next().await.unwrap());
    assert!(!player.can_go_previous().await.unwrap());
    assert!(!player.can_play().await.unwrap());
    assert!(!player.can_pause().await.unwrap());
    assert!(!player.can_control().await.unwrap());
    assert!(player.metadata().await.unwrap().is_empty());
}

#[tokio::test]
async fn metadata_is_read_as_snapshot() {
    let entries = HashMap::from([
        (keys::TITLE.to_string(), Value::from("Lorem")),
        (keys::LENGTH.to_string(), Value::I64(215_000_000)),
    ]);
    let (transport, _signals) = MockTransport::new();
    let player = player_with(transport.with_property(player::METADATA, entries));

    let metadata = player.metadata().await.unwrap();

    assert_eq!(metadata.title().unwrap(), "Lorem");
    assert_eq!(metadata.length().unwrap(), 215_000_000);
    assert_eq!(player.transport().calls(), vec![get(player::METADATA)]);
}

#[tokio::test]
async fn mistyped_property_is_a_type_mismatch() {
    let (transport, _signals) = MockTransport::new();
    let player = player_with(transport.with_property(player::CAN_CONTROL, "yes"));

    let error = player.can_control().await.unwrap_err();

    assert!(error.is_type_mismatch());
    assert!(matches!(
        error,
        MprisError::TypeMismatch(TypeMismatch::Tag {
            observed: "string",
            expected: "bool"
        })
    ));
}

#[tokio::test]
async fn unknown_playback_status_is_a_type_mismatch() {
    let (transport, _signals) = MockTransport::new();
    let player = player_with(transport.with_property(player::PLAYBACK_STATUS, "Buffering"));

    let error = player.playback_status().await.unwrap_err();

    assert!(matches!(
        error,
        MprisError::TypeMismatch(TypeMismatch::UnknownVariant { .. })
    ));
}

#[tokio::test]
async fn read_failure_names_the_property() {
    let (transport, _signals) = MockTransport::new();
    let player = player_with(transport.failing_properties());

    let error = player.rate().await.unwrap_err();

    assert!(matches!(error, MprisError::PropertyReadFailed { .. }));
    let message = error.to_string();
    assert!(message.starts_with("failed to get property \"org.mpris.MediaPlayer2.Player.Rate\": "));
    assert!(message.contains("nope"));
}

#[tokio::test]
async fn set_loop_status_writes_wire_string() {
    let (transport, _signals) = MockTransport::new();
    let player = player_with(transport);

    player.set_loop_status(LoopStatus::Track).await.unwrap();

    assert_eq!(
        player.transport().calls(),
        vec![Call::Set {
            destination: NAME.to_string(),
            path: OBJECT_PATH.to_string(),
            property: "org.mpris.MediaPlayer2.Player.LoopStatus".to_string(),
            value: Value::from("Track"),
        }]
    );
}

#[tokio::test]
async fn setters_wrap_their_values() {
    let (transport, _signals) = MockTransport::new();
    let player = player_with(transport);

    player.set_rate(1.25).await.unwrap();
    player.set_shuffle(false).await.unwrap();
    player.set_volume(0.8).await.unwrap();

    let written: Vec<_> = player
        .transport()
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            Call::Set {
                property, value, ..
            } => Some((property, value)),
            _ => None,
        })
        .collect();
    assert_eq!(
        written,
        vec![
            (player::RATE.to_string(), Value::F64(1.25)),
            (player::SHUFFLE.to_string(), Value::Bool(false)),
            (player::VOLUME.to_string(), Value::F64(0.8)),
        ]
    );
}

#[tokio::test]
async fn write_failure_names_the_property() {
    let (transport, _signals) = MockTransport::new();
    let player = player_with(transport.failing_properties());

    let error = player.set_volume(0.5).await.unwrap_err();

    assert!(error
        .to_string()
        .starts_with("failed to set property \"org.mpris.MediaPlayer2.Player.Volume\": "));
}

#[tokio::test]
async fn close_wraps_transport_error() {
    let (transport, _signals) = MockTransport::new();
    let player = player_with(transport.failing_close());

    let error = player.close().await.unwrap_err();

    assert!(matches!(error, MprisError::CloseFailed(_)));
    assert!(error.to_string().starts_with("failed to close dbus connection: "));
    assert!(error.to_string().contains("nope"));
}

#[tokio::test]
async fn close_succeeds_once() {
    let (transport, _signals) = MockTransport::new();
    let player = Player::with_transport_and_config(NAME, transport, &ClientConfig::default());

    player.close().await.unwrap();

    assert_eq!(player.transport().calls(), vec![Call::Close]);
    assert_eq!(player.name(), NAME);
}
