// Domain layer: the wire data model. No dependencies beyond serde/chrono.

pub mod assets;
pub mod common;
pub mod raw;
pub mod sequences;

pub use assets::AssetAggregateResult;
pub use common::{Identity, ItemsWithCursor, TimeRange};
pub use raw::{RawRow, RawRowCreate};
pub use sequences::{
    SequenceColumnInfo, SequenceData, SequenceFilter, SequenceRow, SequenceValueType,
};
