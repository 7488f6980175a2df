use super::{
    Result,
    protocol::root,
    remote::RemoteObject,
    transport::{DbusTransport, Transport},
};
use crate::config::ClientConfig;

/// Client for the root `org.mpris.MediaPlayer2` interface of one player.
#[derive(Debug)]
pub struct MediaPlayer<T = DbusTransport> {
    remote: RemoteObject<T>,
}

impl MediaPlayer {
    /// Connects to the session bus and addresses the player `name`.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::ConnectionFailed` if the bus cannot be opened.
    pub async fn connect(name: impl Into<String>) -> Result<Self> {
        Self::connect_with_config(name, &ClientConfig::default()).await
    }

    /// Connects to the bus selected by `config`.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::ConnectionFailed` if the bus cannot be opened.
    pub async fn connect_with_config(
        name: impl Into<String>,
        config: &ClientConfig,
    ) -> Result<Self> {
        Ok(Self {
            remote: RemoteObject::connect(name, config.bus).await?,
        })
    }
}

impl<T: Transport> MediaPlayer<T> {
    /// Addresses the player `name` over an already established transport.
    pub fn with_transport(name: impl Into<String>, transport: T) -> Self {
        Self {
            remote: RemoteObject::new(name, transport),
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

    /// Brings the player's user interface to the front.
    pub async fn raise(&self) {
        self.remote.invoke(root::RAISE, Vec::new()).await;
    }

    /// Asks the player to exit.
    pub async fn quit(&self) {
        self.remote.invoke(root::QUIT, Vec::new()).await;
    }

    /// Whether `quit` has any effect.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::PropertyReadFailed` or `MprisError::TypeMismatch`.
    pub async fn can_quit(&self) -> Result<bool> {
        self.remote.get(root::CAN_QUIT).await
    }

    /// Whether `raise` has any effect.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::PropertyReadFailed` or `MprisError::TypeMismatch`.
    pub async fn can_raise(&self) -> Result<bool> {
        self.remote.get(root::CAN_RAISE).await
    }

    /// Whether the player is occupying the fullscreen.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::PropertyReadFailed` or `MprisError::TypeMismatch`.
    pub async fn fullscreen(&self) -> Result<bool> {
        self.remote.get(root::FULLSCREEN).await
    }

    /// Enters or leaves fullscreen, if `can_set_fullscreen` allows it.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::PropertyWriteFailed` if the write fails.
    pub async fn set_fullscreen(&self, fullscreen: bool) -> Result<()> {
        self.remote.set_property(root::FULLSCREEN, fullscreen).await
    }

    /// Whether `set_fullscreen` has any effect.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::PropertyReadFailed` or `MprisError::TypeMismatch`.
    pub async fn can_set_fullscreen(&self) -> Result<bool> {
        self.remote.get(root::CAN_SET_FULLSCREEN).await
    }

    /// Whether the player exposes the track list interface.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::PropertyReadFailed` or `MprisError::TypeMismatch`.
    pub async fn has_track_list(&self) -> Result<bool> {
        self.remote.get(root::HAS_TRACK_LIST).await
    }

    /// Friendly name of the player, e.g. "VLC media player".
    ///
    /// # Errors
    ///
    /// Returns `MprisError::PropertyReadFailed` or `MprisError::TypeMismatch`.
    pub async fn identity(&self) -> Result<String> {
        self.remote.get(root::IDENTITY).await
    }

    /// Basename of the player's desktop file, without `.desktop`.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::PropertyReadFailed` or `MprisError::TypeMismatch`.
    pub async fn desktop_entry(&self) -> Result<String> {
        self.remote.get(root::DESKTOP_ENTRY).await
    }

    /// URI schemes `open_uri` accepts.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::PropertyReadFailed` or `MprisError::TypeMismatch`.
    pub async fn supported_uri_schemes(&self) -> Result<Vec<String>> {
        self.remote.get(root::SUPPORTED_URI_SCHEMES).await
    }

    /// MIME types the player can open.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::PropertyReadFailed` or `MprisError::TypeMismatch`.
    pub async fn supported_mime_types(&self) -> Result<Vec<String>> {
        self.remote.get(root::SUPPORTED_MIME_TYPES).await
    }

    /// Closes the transport. The client must not be used afterwards.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::CloseFailed` if the transport fails to close.
    pub async fn close(&self) -> Result<()> {
        self.remote.close().await
    }
}
