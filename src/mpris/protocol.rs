//! MPRIS wire names.
//!
//! Method, property and signal names are fully qualified
//! (`interface.Member`), which is how the transport addresses them.
//! See <https://specifications.freedesktop.org/mpris-spec/latest/>.

#![allow(missing_docs)]

/// Object path every MPRIS player exports its interfaces on
pub const OBJECT_PATH: &str = "/org/mpris/MediaPlayer2";

/// Root interface
pub const ROOT_INTERFACE: &str = "org.mpris.MediaPlayer2";

/// Player interface
pub const PLAYER_INTERFACE: &str = "org.mpris.MediaPlayer2.Player";

/// Methods and properties of `org.mpris.MediaPlayer2`
pub mod root {
    pub const RAISE: &str = "org.mpris.MediaPlayer2.Raise";
    pub const QUIT: &str = "org.mpris.MediaPlayer2.Quit";

    pub const CAN_QUIT: &str = "org.mpris.MediaPlayer2.CanQuit";
    pub const CAN_RAISE: &str = "org.mpris.MediaPlayer2.CanRaise";
    pub const FULLSCREEN: &str = "org.mpris.MediaPlayer2.Fullscreen";
    pub const CAN_SET_FULLSCREEN: &str = "org.mpris.MediaPlayer2.CanSetFullscreen";
    pub const HAS_TRACK_LIST: &str = "org.mpris.MediaPlayer2.HasTrackList";
    pub const IDENTITY: &str = "org.mpris.MediaPlayer2.Identity";
    pub const DESKTOP_ENTRY: &str = "org.mpris.MediaPlayer2.DesktopEntry";
    pub const SUPPORTED_URI_SCHEMES: &str = "org.mpris.MediaPlayer2.SupportedUriSchemes";
    pub const SUPPORTED_MIME_TYPES: &str = "org.mpris.MediaPlayer2.SupportedMimeTypes";
}

/// Methods, properties and signals of `org.mpris.MediaPlayer2.Player`
pub mod player {
    pub const NEXT: &str = "org.mpris.MediaPlayer2.Player.Next";
    pub const PREVIOUS: &str = "org.mpris.MediaPlayer2.Player.Previous";
    pub const PAUSE: &str = "org.mpris.MediaPlayer2.Player.Pause";
    pub const PLAY_PAUSE: &str = "org.mpris.MediaPlayer2.Player.PlayPause";
    pub const STOP: &str = "org.mpris.MediaPlayer2.Player.Stop";
    pub const PLAY: &str = "org.mpris.MediaPlayer2.Player.Play";
    pub const SEEK_TO: &str = "org.mpris.MediaPlayer2.Player.SeekTo";
    pub const SET_POSITION: &str = "org.mpris.MediaPlayer2.Player.SetPosition";
    pub const OPEN_URI: &str = "org.mpris.MediaPlayer2.Player.OpenUri";

    pub const PLAYBACK_STATUS: &str = "org.mpris.MediaPlayer2.Player.PlaybackStatus";
    pub const LOOP_STATUS: &str = "org.mpris.MediaPlayer2.Player.LoopStatus";
    pub const RATE: &str = "org.mpris.MediaPlayer2.Player.Rate";
    pub const SHUFFLE: &str = "org.mpris.MediaPlayer2.Player.Shuffle";
    pub const METADATA: &str = "org.mpris.MediaPlayer2.Player.Metadata";
    pub const VOLUME: &str = "org.mpris.MediaPlayer2.Player.Volume";
    pub const POSITION: &str = "org.mpris.MediaPlayer2.Player.Position";
    pub const MINIMUM_RATE: &str = "org.mpris.MediaPlayer2.Player.MinimumRate";
    pub const MAXIMUM_RATE: &str = "org.mpris.MediaPlayer2.Player.MaximumRate";
    pub const CAN_GO_NEXT: &str = "org.mpris.MediaPlayer2.Player.CanGoNext";
    pub const CAN_GO_PREVIOUS: &str = "org.mpris.MediaPlayer2.Player.CanGoPrevious";
    pub const CAN_PLAY: &str = "org.mpris.MediaPlayer2.Player.CanPlay";
    pub const CAN_PAUSE: &str = "org.mpris.MediaPlayer2.Player.CanPause";
    pub const CAN_SEEK: &str = "org.mpris.MediaPlayer2.Player.CanSeek";
    pub const CAN_CONTROL: &str = "org.mpris.MediaPlayer2.Player.CanControl";

    /// Carries the new position in microseconds as a single `x` argument
    pub const SEEKED: &str = "org.mpris.MediaPlayer2.Player.Seeked";
}

/// Track metadata keys
pub mod metadata {
    pub const TRACK_ID: &str = "mpris:trackid";
    pub const LENGTH: &str = "mpris:length";
    pub const ART_URL: &str = "mpris:artUrl";

    pub const ALBUM: &str = "xesam:album";
    pub const ALBUM_ARTIST: &str = "xesam:albumArtist";
    pub const ARTIST: &str = "xesam:artist";
    pub const AS_TEXT: &str = "xesam:asText";
    pub const AUDIO_BPM: &str = "xesam:audioBPM";
    pub const AUTO_RATING: &str = "xesam:autoRating";
    pub const COMMENT: &str = "xesam:comment";
    pub const COMPOSER: &str = "xesam:composer";
    pub const CONTENT_CREATED: &str = "xesam:contentCreated";
    pub const DISC_NUMBER: &str = "xesam:discNumber";
    pub const FIRST_USED: &str = "xesam:firstUsed";
    pub const GENRE: &str = "xesam:genre";
    pub const LAST_USED: &str = "xesam:lastUsed";
    pub const LYRICIST: &str = "xesam:lyricist";
    pub const TITLE: &str = "xesam:title";
    pub const TRACK_NUMBER: &str = "xesam:trackNumber";
    pub const URL: &str = "xesam:url";
    pub const USE_COUNT: &str = "xesam:useCount";
    pub const USER_RATING: &str = "xesam:userRating";
}
