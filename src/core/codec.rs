use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Encode a request payload for the wire. Unset optional fields are
/// omitted rather than written as null, matching the platform's
/// "absent means unset" convention.
pub fn to_request_body<T: Serialize>(payload: &T) -> Result<String> {
    Ok(serde_json::to_string(payload)?)
}

/// Decode a response body into a typed record.
pub fn from_response_body<T: DeserializeOwned>(body: &str) -> Result<T> {
    Ok(serde_json::from_str(body)?)
}
