use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::params::Params;

/// Request body of every Tushare call.
#[derive(Serialize)]
pub(crate) struct ApiRequest<'a> {
    pub api_name: &'a str,
    pub token: &'a str,
    pub params: &'a Params,
    /// Requested field names joined by commas.
    pub fields: String,
}

/// Outer response object: `{code, msg, data: {fields, items}}`.
#[derive(Deserialize)]
pub(crate) struct Envelope {
    pub code: i64,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub data: Option<DataNode>,
}

#[derive(Deserialize, Default)]
pub(crate) struct DataNode {
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub items: Vec<Vec<Value>>,
}
