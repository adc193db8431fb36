use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::domain::common::{Identity, TimeRange};

/// Value type of a sequence column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SequenceValueType {
    #[default]
    Double,
    String,
    Long,
}

/// Column description returned alongside sequence rows, in the order
/// the row values are given.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceColumnInfo {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub value_type: Option<SequenceValueType>,
}

/// A single sequence row. `values` follows the column order of the
/// enclosing [`SequenceData`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceRow {
    pub row_number: i64,
    pub values: Vec<Value>,
}

/// A page of rows read from a sequence. The sequence is identified by
/// exactly one of `id` and `external_id`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceData {
    /// Server-generated id of the sequence.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<i64>,
    /// Client-assigned external id, unique per resource type.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub external_id: Option<String>,
    /// Column information, in the order the row values are given.
    pub columns: Vec<SequenceColumnInfo>,
    pub rows: Vec<SequenceRow>,
    /// Cursor for the next page, present iff more rows exist.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub next_cursor: Option<String>,
}

/// Filter for listing sequences. All fields are optional and combine
/// as a conjunction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceFilter {
    /// Match this exact name.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    /// Case-sensitive prefix on the external id.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub external_id_prefix: Option<String>,
    /// Restrict to sequences in these data sets.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub data_set_ids: Option<Vec<Identity>>,
    /// Custom metadata, string key to string value. Server limits:
    /// key up to 32 bytes, value up to 512 bytes, up to 16 pairs.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub metadata: Option<HashMap<String, String>>,
    /// Ids of related assets.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub asset_ids: Option<Vec<i64>>,
    /// Restrict to sequences whose related asset sits in a tree rooted
    /// at one of these assets.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub root_asset_ids: Option<Vec<Identity>>,
    /// Restrict to subtrees rooted at these assets, roots included.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub asset_subtree_ids: Option<Vec<Identity>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_time: Option<TimeRange>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_updated_time: Option<TimeRange>,
}
