use tracing::debug;

use crate::config::BusKind;

use super::{
    MprisError, Result,
    protocol::OBJECT_PATH,
    transport::{DbusTransport, Transport},
    value::{FromValue, Value, narrow},
};

/// The `/org/mpris/MediaPlayer2` object of one remote player.
///
/// Every property read, property write and method call of the facades goes
/// through here. Nothing is cached and nothing is retried: each call is one
/// round trip on the transport.
#[derive(Debug)]
pub(crate) struct RemoteObject<T> {
    name: String,
    transport: T,
}

impl<T: Transport> RemoteObject<T> {
    pub(crate) fn new(name: impl Into<String>, transport: T) -> Self {
        Self {
            name: name.into(),
            transport,
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    /// Reads `property` as a raw value.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::PropertyReadFailed` if the transport fails.
    pub(crate) async fn get_property(&self, property: &str) -> Result<Value> {
        self.transport
            .get_property(&self.name, OBJECT_PATH, property)
            .await
            .map_err(|source| MprisError::PropertyReadFailed {
                name: property.to_string(),
                source,
            })
    }

    /// Reads `property` and narrows it to `V`.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::PropertyReadFailed` if the transport fails and
    /// `MprisError::TypeMismatch` if the value is not a `V`.
    pub(crate) async fn get<V: FromValue>(&self, property: &str) -> Result<V> {
        let value = self.get_property(property).await?;
        Ok(narrow(Some(&value))?)
    }

    /// Writes `value` to `property`.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::PropertyWriteFailed` if the transport fails.
    pub(crate) async fn set_property(&self, property: &str, value: impl Into<Value>) -> Result<()> {
        self.transport
            .set_property(&self.name, OBJECT_PATH, property, value.into())
            .await
            .map_err(|source| MprisError::PropertyWriteFailed {
                name: property.to_string(),
                source,
            })
    }

    /// Calls `method` without waiting for any effect.
    ///
    /// Players are expected to ignore actions they cannot perform, so a
    /// failed call is only logged.
    pub(crate) async fn invoke(&self, method: &str, args: Vec<Value>) {
        if let Err(e) = self
            .transport
            .call_method(&self.name, OBJECT_PATH, method, args)
            .await
        {
            debug!(player = %self.name, method, error = %e, "method call failed");
        }
    }

    /// Releases the transport.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::CloseFailed` if the transport fails to close.
    pub(crate) async fn close(&self) -> Result<()> {
        self.transport.close().await.map_err(MprisError::CloseFailed)
    }
}

impl RemoteObject<DbusTransport> {
    /// Opens `bus` and addresses the player `name` on it.
    ///
    /// # Errors
    ///
    /// Returns `MprisError::ConnectionFailed` if the bus cannot be opened.
    pub(crate) async fn connect(name: impl Into<String>, bus: BusKind) -> Result<Self> {
        let transport = DbusTransport::connect(bus)
            .await
            .map_err(|source| MprisError::ConnectionFailed { bus, source })?;

        Ok(Self::new(name, transport))
    }
}
