//! Signal subscription engine.
//!
//! A subscription registers a match rule, then hands the transport's signal
//! queue to a spawned listen loop. The loop decodes each signal and forwards
//! the accepted ones, in arrival order, over a bounded channel until the
//! caller's [`CancellationToken`] fires, the signal source ends or the
//! consumer drops its stream. Whichever happens first, the loop returns and
//! drops both the signal queue and the sending half, so the output closes
//! exactly once and the transport can release its match rule.

use std::{
    fmt::Debug,
    pin::Pin,
    task::{Context, Poll},
};

use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, trace};

use super::{
    MprisError, Result,
    protocol::player::SEEKED,
    transport::{RawSignal, SignalFilter, SignalStream, Transport},
    value::Value,
};

/// Why a received signal was not forwarded.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Discard {
    /// A signal other than the one subscribed to
    OtherSignal,
    /// The body did not have the expected number of arguments
    Arity(usize),
    /// The argument had the wrong tag
    Tag(&'static str),
}

/// Turns a raw signal into a stream item, or says why it is skipped.
pub(crate) type Decoder<V> = fn(&RawSignal) -> std::result::Result<V, Discard>;

/// Registers `filter` and starts a listen loop decoding with `decode`.
///
/// # Errors
///
/// Returns `MprisError::SubscriptionFailed` if the match rule cannot be
/// registered. The transport's signal queue is not opened in that case.
#[instrument(skip(transport, decode, cancel), fields(sender = %filter.sender))]
pub(crate) async fn subscribe<T, V>(
    transport: &T,
    filter: SignalFilter,
    buffer: usize,
    decode: Decoder<V>,
    cancel: CancellationToken,
) -> Result<mpsc::Receiver<V>>
where
    T: Transport,
    V: Debug + Send + 'static,
{
    transport
        .add_signal_match(&filter)
        .await
        .map_err(MprisError::SubscriptionFailed)?;

    let signals = transport.signals(&filter).await;
    let (tx, rx) = mpsc::channel(buffer.max(1));

    tokio::spawn(listen(filter.sender, signals, decode, tx, cancel));

    Ok(rx)
}

#[instrument(skip_all, fields(sender = %sender))]
async fn listen<V: Debug + Send>(
    sender: String,
    mut signals: SignalStream,
    decode: Decoder<V>,
    tx: mpsc::Sender<V>,
    cancel: CancellationToken,
) {
    loop {
        let signal = tokio::select! {
            biased;

            () = cancel.cancelled() => {
                debug!("subscription cancelled");
                break;
            }

            () = tx.closed() => {
                debug!("subscriber dropped the stream");
                break;
            }

            next = signals.next() => match next {
                Some(signal) => signal,
                None => {
                    debug!("signal source ended");
                    break;
                }
            },
        };

        let item = match decode(&signal) {
            Ok(item) => item,
            Err(reason) => {
                debug!(signal = %signal.name, ?reason, "discarding signal");
                continue;
            }
        };

        trace!(signal = %signal.name, ?item, "forwarding signal");

        tokio::select! {
            biased;

            () = cancel.cancelled() => {
                debug!("subscription cancelled while forwarding");
                break;
            }

            sent = tx.send(item) => {
                if sent.is_err() {
                    debug!("subscriber dropped the stream");
                    break;
                }
            }
        }
    }
}

/// Accepts `Seeked` signals carrying exactly one integer.
pub(crate) fn decode_seeked(signal: &RawSignal) -> std::result::Result<i64, Discard> {
    if signal.name != SEEKED {
        return Err(Discard::OtherSignal);
    }

    match signal.body.as_slice() {
        [Value::I64(position)] => Ok(*position),
        [other] => Err(Discard::Tag(other.tag())),
        body => Err(Discard::Arity(body.len())),
    }
}

/// Positions in microseconds reported by the player's `Seeked` signal.
///
/// Ends once the subscription's cancellation token fires, even if decoded
/// positions are still buffered, or when the signal source goes away.
#[derive(Debug)]
pub struct PositionStream {
    inner: ReceiverStream<i64>,
    cancel: CancellationToken,
}

impl PositionStream {
    pub(crate) fn new(rx: mpsc::Receiver<i64>, cancel: CancellationToken) -> Self {
        Self {
            inner: ReceiverStream::new(rx),
            cancel,
        }
    }
}

impl Stream for PositionStream {
    type Item = i64;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.cancel.is_cancelled() {
            return Poll::Ready(None);
        }

        Pin::new(&mut this.inner).poll_next(cx)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn seeked(body: Vec<Value>) -> RawSignal {
        RawSignal {
            sender: None,
            path: None,
            name: SEEKED.to_string(),
            body,
        }
    }

    #[test]
    fn accepts_single_integer() {
        assert_eq!(decode_seeked(&seeked(vec![Value::I64(1111)])), Ok(1111));
    }

    #[test]
    fn rejects_other_signal_names() {
        let mut signal = seeked(vec![Value::I64(1)]);
        signal.name = "org.mpris.MediaPlayer2.Player.Unknown".to_string();

        assert_eq!(decode_seeked(&signal), Err(Discard::OtherSignal));
    }

    #[test]
    fn rejects_wrong_arity() {
        assert_eq!(
            decode_seeked(&seeked(vec![Value::I64(1), Value::I64(2)])),
            Err(Discard::Arity(2))
        );
        assert_eq!(decode_seeked(&seeked(Vec::new())), Err(Discard::Arity(0)));
    }

    #[test]
    fn rejects_non_integer_argument() {
        assert_eq!(
            decode_seeked(&seeked(vec![Value::from("1111")])),
            Err(Discard::Tag("string"))
        );
    }
}
