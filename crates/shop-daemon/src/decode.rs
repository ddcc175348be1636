//! Lenient JSON body decoding.
//!
//! Bodies are decoded the way a forgiving client expects:
//! - only the first JSON value is read, trailing bytes are ignored;
//! - a top-level `null` decodes to the type's default;
//! - object keys match field names case-insensitively (last key wins);
//! - `null` object members leave the field at its default.
//!
//! Anything that is not JSON, or whose values have the wrong type, is an
//! invalid request.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ApiError;

/// Decode the first JSON value in `body` into `T`.
pub fn decode_body<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, ApiError> {
    let first = match serde_json::Deserializer::from_slice(body)
        .into_iter::<Value>()
        .next()
    {
        Some(Ok(value)) => value,
        Some(Err(err)) => {
            debug!(%err, "rejecting request body");
            return Err(ApiError::INVALID_BODY);
        }
        None => {
            debug!("rejecting empty request body");
            return Err(ApiError::INVALID_BODY);
        }
    };

    if first.is_null() {
        return Ok(T::default());
    }

    serde_json::from_value(fold_keys(first)).map_err(|err| {
        debug!(%err, "rejecting request body");
        ApiError::INVALID_BODY
    })
}

/// Lower-case every object key and drop `null` members, recursively.
fn fold_keys(value: Value) -> Value {
    match value {
        Value::Object(members) => {
            let mut folded = Map::with_capacity(members.len());
            for (key, member) in members {
                if member.is_null() {
                    continue;
                }
                folded.insert(key.to_lowercase(), fold_keys(member));
            }
            Value::Object(folded)
        }
        Value::Array(elems) => Value::Array(elems.into_iter().map(fold_keys).collect()),
        other => other,
    }
}
