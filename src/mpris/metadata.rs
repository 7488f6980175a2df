use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use super::{
    TypeMismatch,
    protocol::metadata as keys,
    value::{FromValue, ObjectPath, Value, narrow, narrow_timestamp},
};

/// Metadata of the current track.
///
/// A snapshot taken by one `Metadata` property read; it never changes after
/// construction. No key is required to be present, although players are
/// expected to set `mpris:trackid` whenever there is a track.
///
/// See <https://www.freedesktop.org/wiki/Specifications/mpris-spec/metadata/>.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Metadata(HashMap<String, Value>);

impl Metadata {
    /// A unique identity for this track within the context of an MPRIS object.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the entry is not an object path.
    pub fn track_id(&self) -> Result<ObjectPath, TypeMismatch> {
        self.get(keys::TRACK_ID)
    }

    /// The duration of the track in microseconds.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the entry is not an integer.
    pub fn length(&self) -> Result<i64, TypeMismatch> {
        self.get(keys::LENGTH)
    }

    /// Location of an image representing the track or album.
    ///
    /// Clients should not assume it keeps existing once the player stops
    /// handing it out.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the entry is not a string.
    pub fn art_url(&self) -> Result<String, TypeMismatch> {
        self.get(keys::ART_URL)
    }

    /// The album name.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the entry is not a string.
    pub fn album(&self) -> Result<String, TypeMismatch> {
        self.get(keys::ALBUM)
    }

    /// The album artist(s).
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the entry is not a list of strings.
    pub fn album_artist(&self) -> Result<Vec<String>, TypeMismatch> {
        self.get(keys::ALBUM_ARTIST)
    }

    /// The track artist(s).
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the entry is not a list of strings.
    pub fn artist(&self) -> Result<Vec<String>, TypeMismatch> {
        self.get(keys::ARTIST)
    }

    /// The track lyrics.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the entry is not a string.
    pub fn as_text(&self) -> Result<String, TypeMismatch> {
        self.get(keys::AS_TEXT)
    }

    /// The speed of the music, in beats per minute.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the entry is not an integer.
    pub fn audio_bpm(&self) -> Result<i64, TypeMismatch> {
        self.get(keys::AUDIO_BPM)
    }

    /// An automatically generated rating in the range 0.0 to 1.0.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the entry is not a double.
    pub fn auto_rating(&self) -> Result<f64, TypeMismatch> {
        self.get(keys::AUTO_RATING)
    }

    /// Freeform comment(s).
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the entry is not a list of strings.
    pub fn comment(&self) -> Result<Vec<String>, TypeMismatch> {
        self.get(keys::COMMENT)
    }

    /// The composer(s) of the track.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the entry is not a list of strings.
    pub fn composer(&self) -> Result<Vec<String>, TypeMismatch> {
        self.get(keys::COMPOSER)
    }

    /// When the track was created. Usually only the year is meaningful.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the entry is not a timestamp string.
    pub fn content_created(&self) -> Result<Option<DateTime<FixedOffset>>, TypeMismatch> {
        narrow_timestamp(self.0.get(keys::CONTENT_CREATED))
    }

    /// The disc number on the album that this track is from.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the entry is not an integer.
    pub fn disc_number(&self) -> Result<i64, TypeMismatch> {
        self.get(keys::DISC_NUMBER)
    }

    /// When the track was first played.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the entry is not a timestamp string.
    pub fn first_used(&self) -> Result<Option<DateTime<FixedOffset>>, TypeMismatch> {
        narrow_timestamp(self.0.get(keys::FIRST_USED))
    }

    /// The genre(s) of the track.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the entry is not a list of strings.
    pub fn genre(&self) -> Result<Vec<String>, TypeMismatch> {
        self.get(keys::GENRE)
    }

    /// When the track was last played.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the entry is not a timestamp string.
    pub fn last_used(&self) -> Result<Option<DateTime<FixedOffset>>, TypeMismatch> {
        narrow_timestamp(self.0.get(keys::LAST_USED))
    }

    /// The lyricist(s) of the track.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the entry is not a list of strings.
    pub fn lyricist(&self) -> Result<Vec<String>, TypeMismatch> {
        self.get(keys::LYRICIST)
    }

    /// The track title.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the entry is not a string.
    pub fn title(&self) -> Result<String, TypeMismatch> {
        self.get(keys::TITLE)
    }

    /// The track number on the album disc.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the entry is not an integer.
    pub fn track_number(&self) -> Result<i64, TypeMismatch> {
        self.get(keys::TRACK_NUMBER)
    }

    /// The location of the media file.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the entry is not a string.
    pub fn url(&self) -> Result<String, TypeMismatch> {
        self.get(keys::URL)
    }

    /// The number of times the track has been played.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the entry is not an integer.
    pub fn use_count(&self) -> Result<i64, TypeMismatch> {
        self.get(keys::USE_COUNT)
    }

    /// A user-specified rating in the range 0.0 to 1.0.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the entry is not a double.
    pub fn user_rating(&self) -> Result<f64, TypeMismatch> {
        self.get(keys::USER_RATING)
    }

    /// Raw entry for `key`, for keys without a typed accessor.
    pub fn find(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// All keys present in this snapshot
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the player reported no metadata at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn get<T: FromValue>(&self, key: &str) -> Result<T, TypeMismatch> {
        narrow(self.0.get(key))
    }
}

impl From<HashMap<String, Value>> for Metadata {
    fn from(entries: HashMap<String, Value>) -> Self {
        Self(entries)
    }
}

impl From<Metadata> for Value {
    fn from(metadata: Metadata) -> Self {
        Self::Map(metadata.0)
    }
}

impl FromValue for Metadata {
    const EXPECTED: &'static str = "map";

    fn from_present(value: &Value) -> Option<Self> {
        HashMap::<String, Value>::from_present(value).map(Self)
    }
}
