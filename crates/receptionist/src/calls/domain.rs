use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

pub const DEFAULT_BOT_NAME: &str = "Receptionist Bot";

/// Call summary stored when the post-call webhook fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallLog {
    pub id: String,
    pub bot_uid: String,
    pub bot_name: String,
    pub caller_number: String,
    pub call_duration: Number,
    pub transcript: String,
    pub status: String,
    pub start_time: String,
    pub end_time: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl CallLog {
    /// Build a log entry from a loosely shaped webhook body, filling gaps with defaults.
    ///
    /// Blank strings count as absent. The duration is kept as received unless it
    /// is missing, negative or not a number, in which case it is zero. Entries
    /// under the body's `metadata` object override the default metadata keys.
    pub fn from_webhook(body: &Value, now: DateTime<Utc>) -> Self {
        let now_text = now.to_rfc3339_opts(SecondsFormat::Millis, true);

        let mut metadata = Map::new();
        metadata.insert(
            "call_quality".to_string(),
            Value::from(text_or(body, "call_quality", "good")),
        );
        metadata.insert(
            "user_satisfaction".to_string(),
            Value::from(text_or(body, "user_satisfaction", "satisfied")),
        );
        metadata.insert("purpose_fulfilled".to_string(), Value::Bool(true));
        metadata.insert("follow_up_required".to_string(), Value::Bool(false));
        if let Some(extra) = body.get("metadata").and_then(Value::as_object) {
            for (key, value) in extra {
                metadata.insert(key.clone(), value.clone());
            }
        }

        Self {
            id: format!("call_{}", now.timestamp_millis()),
            bot_uid: text_or(body, "bot_uid", "unknown"),
            bot_name: text_or(body, "bot_name", DEFAULT_BOT_NAME),
            caller_number: text_or(body, "caller_number", "unknown"),
            call_duration: duration_seconds(body.get("duration")),
            transcript: text_or(body, "transcript", ""),
            status: text_or(body, "status", "completed"),
            start_time: text_or(body, "start_time", &now_text),
            end_time: text_or(body, "end_time", &now_text),
            timestamp: now,
            metadata,
        }
    }
}

fn text_or(body: &Value, key: &str, default: &str) -> String {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .unwrap_or(default)
        .to_string()
}

fn duration_seconds(value: Option<&Value>) -> Number {
    match value {
        Some(Value::Number(number)) if number.as_f64().is_some_and(|secs| secs >= 0.0) => {
            number.clone()
        }
        _ => Number::from(0u64),
    }
}
