//! Response Envelope
//!
//! Every endpoint answers `{ "data": ... }` or `{ "error": ... }`.
//! A truthy `error` wins over the HTTP status.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::{Player, SyncError, SyncResult};

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
}

/// `data` of `GET /players`
#[derive(Debug, Deserialize)]
pub(crate) struct PlayersData {
    pub players: Vec<Player>,
}

/// `data` of `GET /players/{id}` and `POST /players`
#[derive(Debug, Deserialize)]
pub(crate) struct PlayerData {
    pub player: Player,
}

/// JavaScript truthiness
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn error_message(error: &Value) -> String {
    match error {
        Value::String(s) => s.clone(),
        Value::Object(map) => match map.get("message").and_then(Value::as_str) {
            Some(message) => message.to_string(),
            None => error.to_string(),
        },
        other => other.to_string(),
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Parse the envelope and reject error payloads and failed statuses
fn open(status: u16, body: &str) -> SyncResult<Option<Value>> {
    let envelope: Envelope = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(_) if !is_success(status) => return Err(SyncError::Service(format!("HTTP {}", status))),
        Err(e) => return Err(SyncError::Decode(e.to_string())),
    };

    if let Some(error) = envelope.error.as_ref().filter(|e| is_truthy(e)) {
        return Err(SyncError::Service(error_message(error)));
    }
    if !is_success(status) {
        return Err(SyncError::Service(format!("HTTP {}", status)));
    }
    Ok(envelope.data)
}

/// Decode a successful response's `data` into `T`
pub(crate) fn decode_data<T: DeserializeOwned>(status: u16, body: &str) -> SyncResult<T> {
    let data = open(status, body)?.ok_or_else(|| SyncError::Decode("response has no data".to_string()))?;
    serde_json::from_value(data).map_err(|e| SyncError::Decode(e.to_string()))
}

/// Check a response whose `data` is not needed
pub(crate) fn decode_ack(status: u16, body: &str) -> SyncResult<()> {
    open(status, body).map(|_| ())
}
