use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use super::client::constants::WIRE_DATE_FORMAT;

/// The parameter map sent as the `params` object of a request.
///
/// Builders fill this through their setters; setting the same key twice
/// keeps the later value. Keys are ordered for stable serialization.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, Value>);

impl Params {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one parameter key to a scalar value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Set one parameter key to a date, formatted as `YYYYMMDD`.
    pub fn set_date(&mut self, key: impl Into<String>, date: NaiveDate) {
        self.set(key, date.format(WIRE_DATE_FORMAT).to_string());
    }

    /// Set the inclusive `start_date`/`end_date` pair.
    pub fn set_date_range(&mut self, start: NaiveDate, end: NaiveDate) {
        self.set_date("start_date", start);
        self.set_date("end_date", end);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether the `start_date`/`end_date` pair, when both present, is
    /// ordered. `YYYYMMDD` strings compare chronologically.
    pub(crate) fn dates_ordered(&self) -> bool {
        match (
            self.0.get("start_date").and_then(Value::as_str),
            self.0.get("end_date").and_then(Value::as_str),
        ) {
            (Some(start), Some(end)) => start <= end,
            _ => true,
        }
    }
}
