use anyhow::{Context, Error, Result};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub fn parse_payload(payload: &str) -> Result<Value> {
    serde_json::from_str::<Value>(payload).context("Failed to parse payload as JSON")
}

/// Rows that fail to decode are skipped. An empty array is fine, but a
/// non-empty one where nothing decodes is an error.
pub fn parse_response_array<T>(data: Value, error_msg: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    match data {
        Value::Array(items) => {
            let total = items.len();
            let result: Vec<T> = items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect();

            if result.is_empty() && total > 0 {
                Err(Error::msg(error_msg.to_string()))
            } else {
                Ok(result)
            }
        }
        _ => Err(Error::msg("Unexpected API response format: not an array")),
    }
}

pub fn parse_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) => s.parse::<Decimal>().ok(),
        Value::Number(_) => serde_json::from_value::<Decimal>(value.clone()).ok(),
        _ => None,
    }
}
