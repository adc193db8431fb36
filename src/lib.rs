pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::context::Context;
pub use config::ClientConfig;
pub use domain::assets::AssetAggregateResult;
pub use domain::common::{Identity, ItemsWithCursor, TimeRange};
pub use domain::raw::{RawRow, RawRowCreate};
pub use domain::sequences::{
    SequenceColumnInfo, SequenceData, SequenceFilter, SequenceRow, SequenceValueType,
};
pub use utils::error::{ClientError, Result};
