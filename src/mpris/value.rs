//! Dynamic value codec.
//!
//! Remote players are loosely typed, so everything read from the bus arrives
//! as a [`Value`]. The narrowing functions here turn it into a static type
//! without ever panicking: an absent value yields the type's default, a value
//! with the wrong tag yields [`TypeMismatch`].

use std::{collections::HashMap, fmt};

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use super::TypeMismatch;

/// chrono format of `xesam:*` timestamps, e.g. `2007-04-29T13:56+00:00`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M%:z";

/// Human-readable form of [`TIMESTAMP_FORMAT`] used in error messages
pub const TIMESTAMP_LAYOUT: &str = "YYYY-MM-DDThh:mm±hh:mm";

/// Dynamically typed value exchanged with a remote player.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// No value
    #[default]
    Nil,

    /// UTF-8 string
    Str(String),

    /// Any integer; narrower wire integers are widened on receipt
    I64(i64),

    /// Double
    F64(f64),

    /// Boolean
    Bool(bool),

    /// Array of strings
    StrList(Vec<String>),

    /// String-keyed dictionary
    Map(HashMap<String, Value>),

    /// Object path
    ObjectPath(ObjectPath),

    /// Wire value this union cannot carry, with its D-Bus signature
    Unsupported(String),
}

impl Value {
    /// Name of the tag, as reported in [`TypeMismatch::Tag`].
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Str(_) => "string",
            Self::I64(_) => "int64",
            Self::F64(_) => "float64",
            Self::Bool(_) => "bool",
            Self::StrList(_) => "string-list",
            Self::Map(_) => "map",
            Self::ObjectPath(_) => "object-path",
            Self::Unsupported(_) => "unsupported",
        }
    }
}

/// D-Bus object path, e.g. an `mpris:trackid`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct ObjectPath(String);

impl ObjectPath {
    /// Wraps a path string. Validity is checked by the transport on send.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The path as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for ObjectPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

/// Static types a [`Value`] can be narrowed to.
///
/// `Default` supplies the result for absent values.
pub trait FromValue: Sized + Default {
    /// Type name reported on mismatch
    const EXPECTED: &'static str;

    /// Narrows a present value, or `None` if its tag does not fit.
    fn from_present(value: &Value) -> Option<Self>;
}

/// Narrows a possibly absent value to `T`.
///
/// Absence (a missing key or [`Value::Nil`]) is not an error and yields
/// `T::default()`.
///
/// # Errors
///
/// Returns [`TypeMismatch::Tag`] naming the observed tag and `T::EXPECTED`
/// when the value is present but of another type.
pub fn narrow<T: FromValue>(value: Option<&Value>) -> Result<T, TypeMismatch> {
    match value {
        None | Some(Value::Nil) => Ok(T::default()),
        Some(value) => T::from_present(value).ok_or_else(|| TypeMismatch::Tag {
            observed: value.tag(),
            expected: T::EXPECTED,
        }),
    }
}

/// Narrows a possibly absent value to a timestamp.
///
/// # Errors
///
/// Returns [`TypeMismatch::Tag`] if the value is not a string and
/// [`TypeMismatch::Timestamp`] if the string does not match
/// [`TIMESTAMP_FORMAT`].
pub fn narrow_timestamp(
    value: Option<&Value>,
) -> Result<Option<DateTime<FixedOffset>>, TypeMismatch> {
    match value {
        None | Some(Value::Nil) => Ok(None),
        Some(Value::Str(input)) => parse_timestamp(input).map(Some),
        Some(other) => Err(TypeMismatch::Tag {
            observed: other.tag(),
            expected: "timestamp",
        }),
    }
}

/// Parses an `xesam:*` timestamp string.
///
/// # Errors
///
/// Returns [`TypeMismatch::Timestamp`] carrying the input, the expected layout
/// and chrono's diagnostic.
pub fn parse_timestamp(input: &str) -> Result<DateTime<FixedOffset>, TypeMismatch> {
    DateTime::parse_from_str(input, TIMESTAMP_FORMAT).map_err(|source| TypeMismatch::Timestamp {
        input: input.to_string(),
        format: TIMESTAMP_LAYOUT,
        source,
    })
}

impl FromValue for String {
    const EXPECTED: &'static str = "string";

    fn from_present(value: &Value) -> Option<Self> {
        match value {
            Value::Str(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl FromValue for i64 {
    const EXPECTED: &'static str = "int64";

    fn from_present(value: &Value) -> Option<Self> {
        match value {
            Value::I64(n) => Some(*n),
            _ => None,
        }
    }
}

impl FromValue for f64 {
    const EXPECTED: &'static str = "float64";

    fn from_present(value: &Value) -> Option<Self> {
        match value {
            Value::F64(n) => Some(*n),
            _ => None,
        }
    }
}

impl FromValue for bool {
    const EXPECTED: &'static str = "bool";

    fn from_present(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl FromValue for Vec<String> {
    const EXPECTED: &'static str = "string-list";

    fn from_present(value: &Value) -> Option<Self> {
        match value {
            Value::StrList(items) => Some(items.clone()),
            _ => None,
        }
    }
}

impl FromValue for ObjectPath {
    const EXPECTED: &'static str = "object-path";

    fn from_present(value: &Value) -> Option<Self> {
        match value {
            Value::ObjectPath(path) => Some(path.clone()),
            _ => None,
        }
    }
}

impl FromValue for HashMap<String, Value> {
    const EXPECTED: &'static str = "map";

    fn from_present(value: &Value) -> Option<Self> {
        match value {
            Value::Map(map) => Some(map.clone()),
            _ => None,
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::I64(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::F64(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Self::StrList(items)
    }
}

impl From<ObjectPath> for Value {
    fn from(path: ObjectPath) -> Self {
        Self::ObjectPath(path)
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(map: HashMap<String, Value>) -> Self {
        Self::Map(map)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(timestamp: DateTime<FixedOffset>) -> Self {
        Self::Str(timestamp.format(TIMESTAMP_FORMAT).to_string())
    }
}
