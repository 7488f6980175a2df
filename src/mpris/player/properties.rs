use super::Player;
use crate::mpris::{
    Result,
    metadata::Metadata,
    protocol::player,
    transport::Transport,
    types::{LoopStatus, PlaybackStatus, narrow_status},
};

impl<T: Transport> Player<T> {
    /// The current playback status.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::PropertyReadFailed` if the read fails and
    /// `MprisError::TypeMismatch` for an unknown status.
    pub async fn playback_status(&self) -> Result<PlaybackStatus> {
        let value = self.remote.get_property(player::PLAYBACK_STATUS).await?;
        Ok(narrow_status(Some(&value))?)
    }

    /// The current loop / repeat status.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::PropertyReadFailed` if the read fails and
    /// `MprisError::TypeMismatch` for an unknown status.
    pub async fn loop_status(&self) -> Result<LoopStatus> {
        let value = self.remote.get_property(player::LOOP_STATUS).await?;
        Ok(narrow_status(Some(&value))?)
    }

    /// Sets the loop / repeat status.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::PropertyWriteFailed` if the write fails.
    pub async fn set_loop_status(&self, status: LoopStatus) -> Result<()> {
        self.remote.set_property(player::LOOP_STATUS, status).await
    }

    /// The current playback rate, where 1.0 is normal speed.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::PropertyReadFailed` or `MprisError::TypeMismatch`.
    pub async fn rate(&self) -> Result<f64> {
        self.remote.get(player::RATE).await
    }

    /// Sets the playback rate.
    ///
    /// It should lie between `minimum_rate` and `maximum_rate`; players
    /// decide what to do with anything else.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::PropertyWriteFailed` if the write fails.
    pub async fn set_rate(&self, rate: f64) -> Result<()> {
        self.remote.set_property(player::RATE, rate).await
    }

    /// Whether tracks are played in a non-linear order.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::PropertyReadFailed` or `MprisError::TypeMismatch`.
    pub async fn shuffle(&self) -> Result<bool> {
        self.remote.get(player::SHUFFLE).await
    }

    /// Turns shuffling on or off.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::PropertyWriteFailed` if the write fails.
    pub async fn set_shuffle(&self, shuffle: bool) -> Result<()> {
        self.remote.set_property(player::SHUFFLE, shuffle).await
    }

    /// A fresh snapshot of the current track's metadata.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::PropertyReadFailed` if the read fails and
    /// `MprisError::TypeMismatch` if the player did not send a map.
    pub async fn metadata(&self) -> Result<Metadata> {
        self.remote.get(player::METADATA).await
    }

    /// The volume level, where 1.0 is 100%.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::PropertyReadFailed` or `MprisError::TypeMismatch`.
    pub async fn volume(&self) -> Result<f64> {
        self.remote.get(player::VOLUME).await
    }

    /// Sets the volume level. Negative values are treated as 0.0 by players.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::PropertyWriteFailed` if the write fails.
    pub async fn set_volume(&self, volume: f64) -> Result<()> {
        self.remote.set_property(player::VOLUME, volume).await
    }

    /// The current track position in microseconds.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::PropertyReadFailed` or `MprisError::TypeMismatch`.
    pub async fn position(&self) -> Result<i64> {
        self.remote.get(player::POSITION).await
    }

    /// The minimum value `rate` can take.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::PropertyReadFailed` or `MprisError::TypeMismatch`.
    pub async fn minimum_rate(&self) -> Result<f64> {
        self.remote.get(player::MINIMUM_RATE).await
    }

    /// The maximum value `rate` can take.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::PropertyReadFailed` or `MprisError::TypeMismatch`.
    pub async fn maximum_rate(&self) -> Result<f64> {
        self.remote.get(player::MAXIMUM_RATE).await
    }

    /// Whether `next` is expected to change the current track.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::PropertyReadFailed` or `MprisError::TypeMismatch`.
    pub async fn can_go_next(&self) -> Result<bool> {
        self.remote.get(player::CAN_GO_NEXT).await
    }

    /// Whether `previous` is expected to change the current track.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::PropertyReadFailed` or `MprisError::TypeMismatch`.
    pub async fn can_go_previous(&self) -> Result<bool> {
        self.remote.get(player::CAN_GO_PREVIOUS).await
    }

    /// Whether playback can be started with `play` or `play_pause`.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::PropertyReadFailed` or `MprisError::TypeMismatch`.
    pub async fn can_play(&self) -> Result<bool> {
        self.remote.get(player::CAN_PLAY).await
    }

    /// Whether playback can be paused with `pause` or `play_pause`.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::PropertyReadFailed` or `MprisError::TypeMismatch`.
    pub async fn can_pause(&self) -> Result<bool> {
        self.remote.get(player::CAN_PAUSE).await
    }

    /// Whether `seek_to` and `set_position` have any effect.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::PropertyReadFailed` or `MprisError::TypeMismatch`.
    pub async fn can_seek(&self) -> Result<bool> {
        self.remote.get(player::CAN_SEEK).await
    }

    /// Whether the player may be controlled at all.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::PropertyReadFailed` or `MprisError::TypeMismatch`.
    pub async fn can_control(&self) -> Result<bool> {
        self.remote.get(player::CAN_CONTROL).await
    }
}
