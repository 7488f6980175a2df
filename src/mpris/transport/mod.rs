//! Boundary to the message bus.
//!
//! The facades only need a handful of capabilities from the bus, captured by
//! [`Transport`]. [`DbusTransport`] provides them over a zbus connection;
//! tests substitute a recording double.

mod dbus;

pub use dbus::DbusTransport;

use async_trait::async_trait;
use futures::stream::BoxStream;

use super::value::Value;

/// Signals delivered by a transport, in bus order
pub type SignalStream = BoxStream<'static, RawSignal>;

/// A signal as received from the bus, before any decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSignal {
    /// Sender of the signal (unique bus name), when known
    pub sender: Option<String>,

    /// Object path the signal was emitted on, when known
    pub path: Option<String>,

    /// Fully qualified name, `interface.Member`
    pub name: String,

    /// Arguments in order
    pub body: Vec<Value>,
}

/// Match rule for signals a subscription is interested in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignalFilter {
    /// Bus name of the emitting player
    pub sender: String,

    /// Object path the signal is emitted on
    pub path: String,

    /// Interface the signal belongs to
    pub interface: String,

    /// Signal member name, or every member of `interface` when `None`
    pub member: Option<String>,
}

/// Capabilities the MPRIS facades require from the message bus.
///
/// Method and property names are fully qualified (`interface.Member`);
/// implementations split them at the last dot.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Calls `method` on `destination` at `path` with positional `args`.
    ///
    /// The reply body is discarded.
    async fn call_method(
        &self,
        destination: &str,
        path: &str,
        method: &str,
        args: Vec<Value>,
    ) -> zbus::Result<()>;

    /// Reads `property` of the object at `path`.
    async fn get_property(
        &self,
        destination: &str,
        path: &str,
        property: &str,
    ) -> zbus::Result<Value>;

    /// Writes `value` to `property` of the object at `path`.
    async fn set_property(
        &self,
        destination: &str,
        path: &str,
        property: &str,
        value: Value,
    ) -> zbus::Result<()>;

    /// Registers interest in signals matching `filter`.
    async fn add_signal_match(&self, filter: &SignalFilter) -> zbus::Result<()>;

    /// Opens the queue of signals for a filter registered with
    /// [`Transport::add_signal_match`].
    ///
    /// Dropping the returned stream ends the registration. The queue may
    /// still carry signals the filter does not strictly describe, so
    /// consumers check what they receive.
    async fn signals(&self, filter: &SignalFilter) -> SignalStream;

    /// Releases the connection.
    async fn close(&self) -> zbus::Result<()>;
}

/// Splits `org.example.Iface.Member` into interface and member.
pub(crate) fn split_member(qualified: &str) -> zbus::Result<(&str, &str)> {
    qualified
        .rsplit_once('.')
        .filter(|(interface, member)| !interface.is_empty() && !member.is_empty())
        .ok_or_else(|| zbus::Error::Failure(format!("'{qualified}' is not a qualified member name")))
}
