mod control;
mod properties;
mod streams;

use super::{
    Result,
    remote::RemoteObject,
    transport::{DbusTransport, Transport},
};
use crate::config::ClientConfig;

/// Client for the `org.mpris.MediaPlayer2.Player` interface of one player.
///
/// Transport controls are fire-and-forget: a player that cannot perform an
/// action ignores it, and so does this client. Property getters and setters
/// surface every failure to the caller.
///
/// ```rust,no_run
/// use mpris_remote::Player;
///
/// # async fn example() -> mpris_remote::Result<()> {
/// let player = Player::connect("org.mpris.MediaPlayer2.vlc").await?;
/// player.play_pause().await;
/// println!("{}", player.metadata().await?.title()?);
/// player.close().await
/// # }
/// ```
#[derive(Debug)]
pub struct Player<T = DbusTransport> {
    remote: RemoteObject<T>,
    config: ClientConfig,
}

impl Player {
    /// Connects to the session bus and addresses the player `name`.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::ConnectionFailed` if the bus cannot be opened.
    pub async fn connect(name: impl Into<String>) -> Result<Self> {
        Self::connect_with_config(name, &ClientConfig::default()).await
    }

    /// Connects to the bus selected by `config` and addresses the player
    /// `name`.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::ConnectionFailed` if the bus cannot be opened.
    pub async fn connect_with_config(
        name: impl Into<String>,
        config: &ClientConfig,
    ) -> Result<Self> {
        let remote = RemoteObject::connect(name, config.bus).await?;

        Ok(Self {
            remote,
            config: config.clone(),
        })
    }
}

impl<T: Transport> Player<T> {
    /// Addresses the player `name` over an already established transport.
    pub fn with_transport(name: impl Into<String>, transport: T) -> Self {
        Self::with_transport_and_config(name, transport, &ClientConfig::default())
    }

    /// Like [`Player::with_transport`], with explicit configuration.
    pub fn with_transport_and_config(
        name: impl Into<String>,
        transport: T,
        config: &ClientConfig,
    ) -> Self {
        Self {
            remote: RemoteObject::new(name, transport),
            config: config.clone(),
        }
    }

    /// Bus name of the player
    pub fn name(&self) -> &str {
        self.remote.name()
    }

    /// The transport this client talks through
    pub fn transport(&self) -> &T {
        self.remote.transport()
    }

    /// Closes the transport.
    ///
    /// The client must not be used afterwards.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::CloseFailed` if the transport fails to close.
    pub async fn close(&self) -> Result<()> {
        self.remote.close().await
    }
}
