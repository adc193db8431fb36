use serde::{Deserialize, Serialize};

/// Aggregated metrics of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAggregateResult {
    /// Number of direct descendants. Server-computed.
    pub child_count: u32,
}
