//! Outgoing request body preparation.

use serde::Serialize;
use serde_json::Value;

use crate::clients::HttpError;

/// Serializes a resource for transmission, stripping server-managed fields.
///
/// Resource structs round-trip the platform's full representation, so a
/// fetched object carries fields like `id`, `self`, and `creationTime`
/// that the platform rejects or ignores in request bodies. This removes
/// the given top-level keys after serialization so the same struct can be
/// fetched, modified, and sent back.
///
/// # Errors
///
/// Returns [`HttpError::Json`] if the model cannot be serialized.
pub fn to_transmission_json<T: Serialize>(
    model: &T,
    read_only: &[&str],
) -> Result<Value, HttpError> {
    let mut value = serde_json::to_value(model)?;

    if let Value::Object(map) = &mut value {
        for field in read_only {
            map.remove(*field);
        }
    }

    Ok(value)
}
