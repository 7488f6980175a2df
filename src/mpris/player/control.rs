use super::Player;
use crate::mpris::{
    protocol::player,
    transport::Transport,
    value::{ObjectPath, Value},
};

impl<T: Transport> Player<T> {
    /// Skips to the next track in the tracklist.
    pub async fn next(&self) {
        self.remote.invoke(player::NEXT, Vec::new()).await;
    }

    /// Skips to the previous track in the tracklist.
    pub async fn previous(&self) {
        self.remote.invoke(player::PREVIOUS, Vec::new()).await;
    }

    /// Pauses playback. Already paused players are left as they are.
    pub async fn pause(&self) {
        self.remote.invoke(player::PAUSE, Vec::new()).await;
    }

    /// Toggles between playing and paused.
    pub async fn play_pause(&self) {
        self.remote.invoke(player::PLAY_PAUSE, Vec::new()).await;
    }

    /// Stops playback.
    pub async fn stop(&self) {
        self.remote.invoke(player::STOP, Vec::new()).await;
    }

    /// Starts or resumes playback.
    pub async fn play(&self) {
        self.remote.invoke(player::PLAY, Vec::new()).await;
    }

    /// Seeks forward by `offset` microseconds, or backward if negative.
    pub async fn seek_to(&self, offset: i64) {
        self.remote
            .invoke(player::SEEK_TO, vec![Value::I64(offset)])
            .await;
    }

    /// Sets the position of `track_id` to `position` microseconds.
    ///
    /// Players ignore the call if `track_id` is not the current track.
    pub async fn set_position(&self, track_id: impl Into<ObjectPath>, position: i64) {
        let args = vec![Value::ObjectPath(track_id.into()), Value::I64(position)];
        self.remote.invoke(player::SET_POSITION, args).await;
    }

    /// Opens `uri`, whose scheme should be one of `SupportedUriSchemes`.
    pub async fn open_uri(&self, uri: &str) {
        self.remote
            .invoke(player::OPEN_URI, vec![Value::from(uri)])
            .await;
    }
}
