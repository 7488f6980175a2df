use std::{fmt, str::FromStr};

use super::{
    TypeMismatch,
    value::{Value, narrow},
};

/// Current playback state of a media player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    /// A track is currently playing
    Playing,

    /// A track is currently paused
    Paused,

    /// There is no track currently playing
    #[default]
    Stopped,
}

impl PlaybackStatus {
    /// Wire spelling of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Playing => "Playing",
            Self::Paused => "Paused",
            Self::Stopped => "Stopped",
        }
    }
}

impl FromStr for PlaybackStatus {
    type Err = TypeMismatch;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Playing" => Ok(Self::Playing),
            "Paused" => Ok(Self::Paused),
            "Stopped" => Ok(Self::Stopped),
            _ => Err(TypeMismatch::UnknownVariant {
                value: s.to_string(),
                expected: "PlaybackStatus",
            }),
        }
    }
}

/// Loop mode for track or playlist repetition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopStatus {
    /// The playback will stop when there are no more tracks to play
    #[default]
    None,

    /// The current track will start again from the beginning once it has finished playing
    Track,

    /// The playback loops through a list of tracks
    Playlist,
}

impl LoopStatus {
    /// Wire spelling of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Track => "Track",
            Self::Playlist => "Playlist",
        }
    }
}

impl FromStr for LoopStatus {
    type Err = TypeMismatch;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(Self::None),
            "Track" => Ok(Self::Track),
            "Playlist" => Ok(Self::Playlist),
            _ => Err(TypeMismatch::UnknownVariant {
                value: s.to_string(),
                expected: "LoopStatus",
            }),
        }
    }
}

impl fmt::Display for PlaybackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for LoopStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<PlaybackStatus> for Value {
    fn from(status: PlaybackStatus) -> Self {
        Self::Str(status.as_str().to_string())
    }
}

impl From<LoopStatus> for Value {
    fn from(status: LoopStatus) -> Self {
        Self::Str(status.as_str().to_string())
    }
}

/// Narrows a string-typed enumeration such as [`PlaybackStatus`].
///
/// Absent values yield the default member.
pub(crate) fn narrow_status<T>(value: Option<&Value>) -> Result<T, TypeMismatch>
where
    T: FromStr<Err = TypeMismatch> + Default,
{
    match value {
        None | Some(Value::Nil) => Ok(T::default()),
        Some(present) => narrow::<String>(Some(present))?.parse(),
    }
}
