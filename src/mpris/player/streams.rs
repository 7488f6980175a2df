use tokio_util::sync::CancellationToken;

use super::Player;
use crate::mpris::{
    Result,
    protocol::{OBJECT_PATH, PLAYER_INTERFACE},
    signals::{self, PositionStream},
    transport::{SignalFilter, Transport},
};

const SEEKED_MEMBER: &str = "Seeked";

impl<T: Transport> Player<T> {
    /// Streams the positions reported by the player's `Seeked` signal.
    ///
    /// The stream ends when `cancel` fires. Signals that are not a
    /// well-formed `Seeked` are skipped.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::SubscriptionFailed` if the signal match rule
    /// cannot be registered.
    pub async fn subscribe_to_position_changes(
        &self,
        cancel: CancellationToken,
    ) -> Result<PositionStream> {
        let filter = SignalFilter {
            sender: self.name().to_string(),
            path: OBJECT_PATH.to_string(),
            interface: PLAYER_INTERFACE.to_string(),
            member: Some(SEEKED_MEMBER.to_string()),
        };

        let rx = signals::subscribe(
            self.transport(),
            filter,
            self.config.signal_buffer,
            signals::decode_seeked,
            cancel.clone(),
        )
        .await?;

        Ok(PositionStream::new(rx, cancel))
    }
}
