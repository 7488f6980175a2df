//! mpris-remote - typed client for MPRIS media players.
//!
//! Controls and inspects media players that implement the MPRIS D-Bus
//! interface: transport controls, playback and root properties, track
//! metadata and a cancellable stream of `Seeked` positions.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use futures::StreamExt;
//! use mpris_remote::Player;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> mpris_remote::Result<()> {
//! let player = Player::connect("org.mpris.MediaPlayer2.vlc").await?;
//! println!("{}", player.playback_status().await?);
//!
//! let cancel = CancellationToken::new();
//! let mut positions = player.subscribe_to_position_changes(cancel.clone()).await?;
//! if let Some(position) = positions.next().await {
//!     println!("seeked to {position}us");
//! }
//! cancel.cancel();
//!
//! player.close().await
//! # }
//! ```

/// Client configuration and loading.
pub mod config;

/// MPRIS client facades, codec and transport.
pub mod mpris;

/// Subscriber setup for binaries.
pub mod tracing_config;

pub use config::{BusKind, ClientConfig};
pub use mpris::{
    LoopStatus, MediaPlayer, Metadata, MprisError, ObjectPath, PlaybackStatus, Player,
    PositionStream, Result, TypeMismatch, Value,
};
