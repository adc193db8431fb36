use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reference to a resource by internal numeric id or client-assigned
/// external id. Exactly one of the two is ever present.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Identity {
    Id(i64),
    ExternalId(String),
}

impl From<i64> for Identity {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<String> for Identity {
    fn from(external_id: String) -> Self {
        Self::ExternalId(external_id)
    }
}

impl From<&str> for Identity {
    fn from(external_id: &str) -> Self {
        Self::ExternalId(external_id.to_string())
    }
}

/// Inclusive range between two epoch-millisecond timestamps. Either
/// bound may be left open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max: Option<i64>,
}

impl TimeRange {
    pub fn between(min: DateTime<Utc>, max: DateTime<Utc>) -> Self {
        Self {
            min: Some(min.timestamp_millis()),
            max: Some(max.timestamp_millis()),
        }
    }

    pub fn since(min: DateTime<Utc>) -> Self {
        Self {
            min: Some(min.timestamp_millis()),
            max: None,
        }
    }

    pub fn until(max: DateTime<Utc>) -> Self {
        Self {
            min: None,
            max: Some(max.timestamp_millis()),
        }
    }
}

/// List-response envelope. `next_cursor` is present iff the server has
/// more pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemsWithCursor<T> {
    pub items: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub next_cursor: Option<String>,
}
