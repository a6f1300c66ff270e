//! Query string construction for filter and paging parameters.

use serde::Serialize;
use serde_json::Value;

use crate::clients::HttpError;

/// Paging parameters accepted by every collection endpoint.
///
/// Flattened into the filter structs so that paging and filtering travel
/// together. All fields are optional; the platform defaults to page one
/// with five elements per page.
#[derive(Debug, Clone, Copy, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PagingParams {
    /// The number of elements per page, capped at 2000 by the platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// The page to fetch, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_page: Option<u32>,

    /// Whether to compute `totalPages` in the returned statistics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_total_pages: Option<bool>,

    /// Whether to compute `totalElements` in the returned statistics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_total_elements: Option<bool>,
}

impl PagingParams {
    /// Creates paging parameters for the given page size.
    #[must_use]
    pub const fn with_page_size(page_size: u32) -> Self {
        Self {
            page_size: Some(page_size),
            current_page: None,
            with_total_pages: None,
            with_total_elements: None,
        }
    }
}

/// Serializes a filter struct into query parameter pairs.
///
/// Absent (`None`) fields produce no parameter at all. Lists are joined
/// with commas, matching the platform's multi-value convention (e.g.,
/// `ids=1,2,3`). Booleans and numbers use their canonical JSON rendering.
///
/// # Errors
///
/// Returns [`HttpError::Json`] if the filter cannot be serialized.
pub fn serialize_query<T: Serialize>(filter: &T) -> Result<Vec<(String, String)>, HttpError> {
    let value = serde_json::to_value(filter)?;

    let Value::Object(map) = value else {
        return Ok(Vec::new());
    };

    let mut params = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::Null => {}
            Value::String(s) => params.push((key, s)),
            Value::Bool(b) => params.push((key, b.to_string())),
            Value::Number(n) => params.push((key, n.to_string())),
            Value::Array(items) => {
                let joined = items
                    .iter()
                    .map(scalar_to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                params.push((key, joined));
            }
            other @ Value::Object(_) => params.push((key, other.to_string())),
        }
    }

    Ok(params)
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
