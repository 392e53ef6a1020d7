use super::draw::Draw;
use super::History;
use crate::error::AppError;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::info;

pub const DEFAULT_EXPORT_FILE: &str = "lotto_data.json";

/// The portable data file: `{ "history": [[..6..], ...], "lastUpdated": "..." }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryDocument {
    pub history: Vec<Draw>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl HistoryDocument {
    pub fn snapshot(history: &History, now: DateTime<Utc>) -> Self {
        HistoryDocument {
            history: history.draws().to_vec(),
            last_updated: Some(now),
        }
    }

    /// Pretty JSON with 2-space indentation and a millisecond UTC timestamp.
    pub fn to_json(&self) -> Result<String, AppError> {
        let mut value = serde_json::to_value(self)
            .map_err(|e| AppError::JsonError(format!("Failed to serialize history: {}", e)))?;
        if let (Some(ts), Value::Object(map)) = (self.last_updated, &mut value) {
            map.insert(
                "lastUpdated".to_string(),
                Value::String(ts.to_rfc3339_opts(SecondsFormat::Millis, true)),
            );
        }
        serde_json::to_string_pretty(&value)
            .map_err(|e| AppError::JsonError(format!("Failed to serialize history: {}", e)))
    }

    /// Strict parse of the wrapped shape, as required for the default data file.
    pub fn from_json(content: &str) -> Result<Self, AppError> {
        match parse_value(content)? {
            Value::Object(map) if map.contains_key("history") => decode_wrapped(map),
            _ => Err(AppError::Format(
                "expected an object with a \"history\" array".to_string(),
            )),
        }
    }
}

fn parse_value(content: &str) -> Result<Value, AppError> {
    serde_json::from_str(content).map_err(|e| AppError::Format(e.to_string()))
}

/// Runs every item through the draw gate; the first bad one is reported by position.
fn decode_draws(items: Vec<Value>) -> Result<Vec<Draw>, AppError> {
    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| {
            serde_json::from_value::<Draw>(item)
                .map_err(|e| AppError::Format(format!("draw #{}: {}", idx + 1, e)))
        })
        .collect()
}

fn decode_wrapped(mut map: Map<String, Value>) -> Result<HistoryDocument, AppError> {
    let history = match map.remove("history") {
        Some(Value::Array(items)) => decode_draws(items)?,
        _ => {
            return Err(AppError::Format(
                "\"history\" must be an array of draws".to_string(),
            ))
        }
    };

    let last_updated = match map.remove("lastUpdated") {
        None | Some(Value::Null) => None,
        Some(raw) => Some(
            serde_json::from_value::<DateTime<Utc>>(raw)
                .map_err(|e| AppError::Format(format!("lastUpdated: {}", e)))?,
        ),
    };

    Ok(HistoryDocument {
        history,
        last_updated,
    })
}

/// Accepts either the wrapped document or a bare array of draws.
pub fn parse_import(content: &str) -> Result<Vec<Draw>, AppError> {
    match parse_value(content)? {
        Value::Array(items) => decode_draws(items),
        Value::Object(map) if map.contains_key("history") => {
            decode_wrapped(map).map(|doc| doc.history)
        }
        _ => Err(AppError::Format(
            "expected an object with a \"history\" array or a bare array of draws".to_string(),
        )),
    }
}

/// Import operation: read, validate, then replace the history wholesale.
pub fn import_file(path: &Path, history: &mut History) -> Result<usize, AppError> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::Format(format!("Cannot read {}: {}", path.display(), e)))?;
    let draws = parse_import(&content)?;

    history.replace(draws);
    info!(path = %path.display(), draws = history.len(), "history imported");
    Ok(history.len())
}

/// Export operation: write the current history with the current time as `lastUpdated`.
pub fn export_file(path: &Path, history: &History) -> Result<(), AppError> {
    let json = HistoryDocument::snapshot(history, Utc::now()).to_json()?;
    fs::write(path, json).map_err(|e| {
        AppError::Storage(format!("Failed to write {}: {}", path.display(), e))
    })?;

    info!(path = %path.display(), draws = history.len(), "history exported");
    Ok(())
}
