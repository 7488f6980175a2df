use std::{collections::HashMap, fmt, sync::Arc};

use async_stream::stream;
use async_trait::async_trait;
use futures::{StreamExt, stream};
use tokio::sync::Mutex;
use tracing::{debug, info};
use zbus::{
    Connection, MatchRule, MessageStream,
    fdo::{DBusProxy, PropertiesProxy},
    message::{Message, Type as MessageType},
    names::{BusName, InterfaceName, MemberName},
    proxy::CacheProperties,
    zvariant::{self, OwnedValue, Structure, StructureBuilder},
};

use super::{RawSignal, SignalFilter, SignalStream, Transport, split_member};
use crate::{
    config::BusKind,
    mpris::value::{ObjectPath, Value},
};

/// [`Transport`] over a zbus connection.
///
/// Each registered signal filter owns a match rule on the bus daemon for as
/// long as the stream handed out by [`Transport::signals`] is alive. Clones
/// share the connection and the pending registrations.
#[derive(Clone)]
pub struct DbusTransport {
    connection: Connection,
    registered: Arc<Mutex<HashMap<SignalFilter, Vec<MessageStream>>>>,
}

impl DbusTransport {
    /// Opens a connection to `bus`.
    ///
    /// # Errors
    ///
    /// Returns the zbus error if the bus address cannot be resolved, the
    /// socket cannot be opened or authentication fails.
    pub async fn connect(bus: BusKind) -> zbus::Result<Self> {
        let connection = match bus {
            BusKind::Session => Connection::session().await?,
            BusKind::System => Connection::system().await?,
        };

        info!(
            %bus,
            unique_name = ?connection.unique_name(),
            "connected to message bus"
        );

        Ok(Self::from_connection(connection))
    }

    /// Wraps an already configured connection.
    pub fn from_connection(connection: Connection) -> Self {
        Self {
            connection,
            registered: Arc::default(),
        }
    }

    /// The underlying zbus connection
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    async fn properties(
        &self,
        destination: &str,
        path: &str,
    ) -> zbus::Result<PropertiesProxy<'static>> {
        PropertiesProxy::builder(&self.connection)
            .destination(destination.to_string())?
            .path(path.to_string())?
            .cache_properties(CacheProperties::No)
            .build()
            .await
    }

    /// Signals carry the unique name of their sender, so a well-known
    /// player name is resolved to its current owner before matching.
    async fn resolve_sender(&self, name: &str) -> zbus::Result<String> {
        let name = BusName::try_from(name)?;
        if let BusName::Unique(unique) = &name {
            return Ok(unique.to_string());
        }

        let owner = DBusProxy::new(&self.connection)
            .await?
            .get_name_owner(name)
            .await?;
        Ok(owner.to_string())
    }
}

impl fmt::Debug for DbusTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbusTransport")
            .field("connection", &self.connection)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Transport for DbusTransport {
    async fn call_method(
        &self,
        destination: &str,
        path: &str,
        method: &str,
        args: Vec<Value>,
    ) -> zbus::Result<()> {
        let (interface, member) = split_member(method)?;

        if args.is_empty() {
            self.connection
                .call_method(Some(destination), path, Some(interface), member, &())
                .await?;
            return Ok(());
        }

        let mut builder = StructureBuilder::new();
        for arg in args {
            builder.push_value(to_zvariant(arg)?);
        }
        let body = builder.build()?;

        self.connection
            .call_method(Some(destination), path, Some(interface), member, &body)
            .await?;

        Ok(())
    }

    async fn get_property(
        &self,
        destination: &str,
        path: &str,
        property: &str,
    ) -> zbus::Result<Value> {
        let (interface, name) = property_names(property)?;

        let value = self
            .properties(destination, path)
            .await?
            .get(interface, &name)
            .await?;

        Ok(from_zvariant(&value))
    }

    async fn set_property(
        &self,
        destination: &str,
        path: &str,
        property: &str,
        value: Value,
    ) -> zbus::Result<()> {
        let (interface, name) = property_names(property)?;
        let value = to_zvariant(value)?;

        self.properties(destination, path)
            .await?
            .set(interface, &name, value)
            .await?;

        Ok(())
    }

    async fn add_signal_match(&self, filter: &SignalFilter) -> zbus::Result<()> {
        let sender = self.resolve_sender(&filter.sender).await?;
        let rule = match_rule(filter, &sender)?;

        debug!(?rule, "adding signal match rule");
        let messages = MessageStream::for_match_rule(rule, &self.connection, None).await?;

        self.registered
            .lock()
            .await
            .entry(filter.clone())
            .or_default()
            .push(messages);

        Ok(())
    }

    async fn signals(&self, filter: &SignalFilter) -> SignalStream {
        let registered = self
            .registered
            .lock()
            .await
            .get_mut(filter)
            .and_then(Vec::pop);

        let Some(mut messages) = registered else {
            debug!(?filter, "no match rule registered for filter");
            return stream::empty().boxed();
        };

        stream! {
            while let Some(message) = messages.next().await {
                match message {
                    Ok(message) => {
                        if let Some(signal) = to_raw_signal(&message) {
                            yield signal;
                        }
                    }
                    Err(e) => debug!(error = %e, "skipping unreadable message"),
                }
            }
        }
        .boxed()
    }

    async fn close(&self) -> zbus::Result<()> {
        info!("closing message bus connection");
        self.registered.lock().await.clear();
        self.connection.clone().close().await
    }
}

/// Interface and member of a fully qualified property, checked as bus names.
fn property_names(property: &str) -> zbus::Result<(InterfaceName<'_>, MemberName<'_>)> {
    let (interface, name) = split_member(property)?;
    Ok((InterfaceName::try_from(interface)?, MemberName::try_from(name)?))
}

/// Match rule for `filter`, with `sender` standing in for its bus name.
pub(crate) fn match_rule<'a>(
    filter: &'a SignalFilter,
    sender: &'a str,
) -> zbus::Result<MatchRule<'a>> {
    let mut builder = MatchRule::builder()
        .msg_type(MessageType::Signal)
        .sender(sender)?
        .path(filter.path.as_str())?
        .interface(filter.interface.as_str())?;
    if let Some(member) = &filter.member {
        builder = builder.member(member.as_str())?;
    }

    Ok(builder.build())
}

pub(crate) fn to_raw_signal(message: &Message) -> Option<RawSignal> {
    if message.message_type() != MessageType::Signal {
        return None;
    }

    let header = message.header();
    let interface = header.interface()?;
    let member = header.member()?;

    let body = message.body();
    let fields = if body.is_empty() {
        Vec::new()
    } else {
        body.deserialize::<Structure<'_>>()
            .map(|structure| structure.fields().iter().map(from_zvariant).collect())
            .unwrap_or_default()
    };

    Some(RawSignal {
        sender: header.sender().map(|sender| sender.to_string()),
        path: header.path().map(|path| path.to_string()),
        name: format!("{interface}.{member}"),
        body: fields,
    })
}

/// Converts a received wire value into the client's union.
///
/// Integers of every width are widened to `I64`; values the union cannot
/// carry become `Unsupported` with their signature.
pub(crate) fn from_zvariant(value: &zvariant::Value<'_>) -> Value {
    use zvariant::Value as Wire;

    match value {
        Wire::Str(s) => Value::Str(s.to_string()),
        Wire::Bool(b) => Value::Bool(*b),
        Wire::F64(n) => Value::F64(*n),
        Wire::U8(n) => Value::I64(i64::from(*n)),
        Wire::I16(n) => Value::I64(i64::from(*n)),
        Wire::U16(n) => Value::I64(i64::from(*n)),
        Wire::I32(n) => Value::I64(i64::from(*n)),
        Wire::U32(n) => Value::I64(i64::from(*n)),
        Wire::I64(n) => Value::I64(*n),
        Wire::U64(n) => i64::try_from(*n)
            .map(Value::I64)
            .unwrap_or_else(|_| unsupported(value)),
        Wire::ObjectPath(path) => Value::ObjectPath(ObjectPath::new(path.as_str())),
        Wire::Value(inner) => from_zvariant(inner),
        Wire::Array(array) => array
            .iter()
            .map(|item| match item {
                Wire::Str(s) => Some(s.to_string()),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .map(Value::StrList)
            .unwrap_or_else(|| unsupported(value)),
        Wire::Dict(_) => value
            .try_to_owned()
            .ok()
            .and_then(|owned| HashMap::<String, OwnedValue>::try_from(owned).ok())
            .map(|entries| {
                Value::Map(
                    entries
                        .iter()
                        .map(|(key, entry)| (key.clone(), from_zvariant(entry)))
                        .collect(),
                )
            })
            .unwrap_or_else(|| unsupported(value)),
        _ => unsupported(value),
    }
}

/// Converts an outgoing value into its wire form.
///
/// # Errors
///
/// Fails for `Nil` and `Unsupported`, which have no wire form, and for
/// object paths that are not syntactically valid.
pub(crate) fn to_zvariant(value: Value) -> zbus::Result<zvariant::Value<'static>> {
    use zvariant::Value as Wire;

    match value {
        Value::Str(s) => Ok(Wire::from(s)),
        Value::I64(n) => Ok(Wire::I64(n)),
        Value::F64(n) => Ok(Wire::F64(n)),
        Value::Bool(b) => Ok(Wire::Bool(b)),
        Value::StrList(items) => Ok(Wire::from(items)),
        Value::ObjectPath(path) => Ok(Wire::ObjectPath(zvariant::ObjectPath::try_from(
            path.as_str().to_string(),
        )?)),
        Value::Map(entries) => {
            let dict = entries
                .into_iter()
                .map(|(key, entry)| Ok((key, to_zvariant(entry)?)))
                .collect::<zbus::Result<HashMap<String, Wire<'static>>>>()?;
            Ok(Wire::from(dict))
        }
        Value::Nil | Value::Unsupported(_) => Err(zbus::Error::Failure(format!(
            "a {} value cannot be sent",
            value.tag()
        ))),
    }
}

fn unsupported(value: &zvariant::Value<'_>) -> Value {
    Value::Unsupported(value.value_signature().to_string())
}
