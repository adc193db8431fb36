use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Row to write to a table in the raw store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRowCreate {
    /// Row key. Unique within the table.
    pub key: String,
    /// Row data as an arbitrary JSON object.
    pub columns: HashMap<String, Value>,
}

/// Row read back from a table in the raw store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRow {
    pub key: String,
    pub columns: HashMap<String, Value>,
    /// Epoch milliseconds of the last server-side update.
    pub last_updated_time: i64,
}
