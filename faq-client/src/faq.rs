use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Key holding the FAQ entries in the service payload.
pub const CATEGORIES_KEY: &str = "categories";

/// Decoded FAQ payload.
///
/// Only built from a JSON object whose `categories` entry is non-empty, so
/// holding a `Faq` means the service returned usable data.
#[derive(Debug, Clone, PartialEq)]
pub struct Faq {
    data: Map<String, Value>,
}

impl Faq {
    /// Validate a decoded body. Returns `None` when `categories` is missing or empty.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(data) if data.get(CATEGORIES_KEY).is_some_and(|c| !is_blank(c)) => {
                Some(Self { data })
            }
            _ => None,
        }
    }

    /// Parse and validate a raw response body.
    ///
    /// Malformed JSON is treated like a payload without categories.
    pub fn from_body(body: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => Self::from_value(value),
            Err(e) => {
                log::warn!("FAQ response is not valid JSON: {}", e);
                None
            }
        }
    }

    /// The FAQ entries, in service order.
    ///
    /// Empty when `categories` is a non-array value, e.g. an object keyed by id.
    pub fn categories(&self) -> &[Value] {
        self.data
            .get(CATEGORIES_KEY)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.data
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.data
    }

    /// Decode the payload into a caller-defined model.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(Value::Object(self.data.clone()))
    }
}

// Loose emptiness: null, false, 0, "", "0" and empty containers all count.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
