//! Columnar decoding: name→position lookup plus null-safe scalar coercion.
//!
//! Tushare returns one shared field-name list and row-major value arrays.
//! [`FieldMap`] is built once per response; [`Column`] getters coerce one
//! cell per call. Columns that were requested but never returned decode to
//! each type's zero value — presence is tracked explicitly, so an absent
//! column is never confused with whatever happens to sit at position 0.

use chrono::NaiveDate;
use serde_json::Value;

use super::client::constants::WIRE_DATE_FORMAT;
use super::error::TsError;

/// Name→position lookup built from a response's field-name list.
#[derive(Debug)]
pub struct FieldMap {
    index: std::collections::HashMap<String, usize>,
}

impl FieldMap {
    #[must_use]
    pub fn new(fields: &[String]) -> Self {
        let index = fields
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        Self { index }
    }

    /// Resolve a column by name. A name the server never returned yields a
    /// column whose getters produce zero values.
    #[must_use]
    pub fn column(&self, name: &str) -> Column {
        Column {
            name: name.to_string(),
            pos: self.index.get(name).copied(),
        }
    }
}

/// One resolved column, consumed row by row.
#[derive(Debug, Clone)]
pub struct Column {
    name: String,
    pos: Option<usize>,
}

impl Column {
    /// Whether the server actually returned this column.
    #[must_use]
    pub const fn present(&self) -> bool {
        self.pos.is_some()
    }

    /// String cell; null or absent → `""`.
    pub fn str(&self, row: &[Value]) -> Result<String, TsError> {
        match self.value(row)? {
            None | Some(Value::Null) => Ok(String::new()),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Err(self.mismatch("string", other)),
        }
    }

    /// Float cell; null or absent → `0.0`.
    pub fn f64(&self, row: &[Value]) -> Result<f64, TsError> {
        match self.value(row)? {
            None | Some(Value::Null) => Ok(0.0),
            Some(Value::Number(n)) => n
                .as_f64()
                .ok_or_else(|| self.mismatch("number", &Value::Number(n.clone()))),
            Some(other) => Err(self.mismatch("number", other)),
        }
    }

    /// Integer cell; null or absent → `0`. The service encodes counts as
    /// floats, so integral floats are accepted.
    #[allow(clippy::cast_possible_truncation)]
    pub fn i64(&self, row: &[Value]) -> Result<i64, TsError> {
        match self.value(row)? {
            None | Some(Value::Null) => Ok(0),
            Some(Value::Number(n)) => {
                if let Some(i) = n.as_i64() {
                    return Ok(i);
                }
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 => Ok(f as i64),
                    _ => Err(self.mismatch("integer", &Value::Number(n.clone()))),
                }
            }
            Some(other) => Err(self.mismatch("integer", other)),
        }
    }

    /// Date cell in `YYYYMMDD` form; null, absent, or empty → `None`.
    pub fn date(&self, row: &[Value]) -> Result<Option<NaiveDate>, TsError> {
        match self.value(row)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) if s.is_empty() => Ok(None),
            Some(Value::String(s)) => NaiveDate::parse_from_str(s, WIRE_DATE_FORMAT)
                .map(Some)
                .map_err(|e| {
                    TsError::Decode(format!("column `{}`: invalid date `{s}`: {e}", self.name))
                }),
            Some(other) => Err(self.mismatch("date string", other)),
        }
    }

    /// Like [`Column::date`], but a missing date is a decode error.
    pub fn required_date(&self, row: &[Value]) -> Result<NaiveDate, TsError> {
        self.date(row)?.ok_or_else(|| {
            TsError::Decode(format!("column `{}`: date missing from response", self.name))
        })
    }

    fn value<'r>(&self, row: &'r [Value]) -> Result<Option<&'r Value>, TsError> {
        match self.pos {
            None => Ok(None),
            Some(i) => match row.get(i) {
                Some(v) => Ok(Some(v)),
                None => Err(TsError::Decode(format!(
                    "row has {} values but column `{}` is at position {i}",
                    row.len(),
                    self.name
                ))),
            },
        }
    }

    fn mismatch(&self, expected: &str, got: &Value) -> TsError {
        TsError::Decode(format!(
            "column `{}`: expected {expected}, got {got}",
            self.name
        ))
    }
}
