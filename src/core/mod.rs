pub mod codec;
pub mod context;

pub use crate::utils::error::Result;
pub use codec::{from_response_body, to_request_body};
pub use context::Context;
