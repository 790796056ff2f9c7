use std::time::Duration;

use futures::StreamExt;
use serde::Deserialize;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use crate::event::Event;

/// Name of the push event carrying a partial snapshot payload.
const UPDATE_METRICS: &str = "update_metrics";

/// Wire envelope for push events. `data` is itself a serialized partial
/// snapshot; the producer double-encodes.
#[derive(Debug, Deserialize)]
struct Envelope {
    event: String,
    data: String,
}

/// Background subscriber for the telemetry feed. Forwards `update_metrics`
/// payloads and connection-state changes into the app's event queue and
/// reconnects with a fixed delay when the feed drops.
pub struct Transport {
    task: JoinHandle<()>,
}

impl Transport {
    pub fn spawn(url: String, tx: mpsc::UnboundedSender<Event>, reconnect: Duration) -> Self {
        let task = tokio::spawn(subscribe_loop(url, tx, reconnect));
        Transport { task }
    }

    /// Unsubscribe: after this no further events reach the queue, so a
    /// disposed store never sees a late frame.
    pub fn shutdown(&self) {
        self.task.abort();
    }
}

impl Drop for Transport {
    fn drop(&mut self) {
        self.shutdown();
    }
}

async fn subscribe_loop(url: String, tx: mpsc::UnboundedSender<Event>, reconnect: Duration) {
    loop {
        match connect_async(url.as_str()).await {
            Ok((mut stream, _)) => {
                tracing::info!(%url, "telemetry feed connected");
                if tx.send(Event::Connected).is_err() {
                    return;
                }

                while let Some(frame) = stream.next().await {
                    match frame {
                        Ok(Message::Text(text)) => {
                            if let Some(payload) = extract_payload(&text)
                                && tx.send(Event::Metrics(payload)).is_err()
                            {
                                return;
                            }
                        }
                        Ok(Message::Close(_)) => break,
                        Ok(_) => {}
                        Err(err) => {
                            tracing::warn!(%err, "telemetry feed read error");
                            break;
                        }
                    }
                }
            }
            Err(err) => {
                tracing::warn!(%url, %err, "telemetry feed connect failed");
            }
        }

        if tx.send(Event::Disconnected).is_err() {
            return;
        }
        tokio::time::sleep(reconnect).await;
    }
}

/// Decode an envelope and return the payload of an `update_metrics` event.
/// Anything else (other events, malformed envelopes) is dropped here so the
/// store only ever sees candidate snapshot payloads.
fn extract_payload(text: &str) -> Option<String> {
    match serde_json::from_str::<Envelope>(text) {
        Ok(envelope) if envelope.event == UPDATE_METRICS => Some(envelope.data),
        Ok(envelope) => {
            tracing::debug!(event = %envelope.event, "ignoring unknown push event");
            None
        }
        Err(err) => {
            tracing::warn!(%err, "discarding malformed push frame");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_metrics_payload_is_forwarded() {
        let frame = r#"{"event": "update_metrics", "data": "{\"cpu\": {\"usage\": 10.0}}"}"#;
        let payload = extract_payload(frame).unwrap();
        assert_eq!(payload, r#"{"cpu": {"usage": 10.0}}"#);
    }

    #[test]
    fn other_events_are_ignored() {
        let frame = r#"{"event": "heartbeat", "data": "{}"}"#;
        assert!(extract_payload(frame).is_none());
    }

    #[test]
    fn malformed_frames_are_dropped() {
        assert!(extract_payload("not json").is_none());
        assert!(extract_payload(r#"{"event": "update_metrics"}"#).is_none());
    }
}
