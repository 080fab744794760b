//! Opaque, resource-scoped pagination tokens.
//!
//! Wire format: standard base64 of `{"cursor":"<position>","resource":"<tag>"}`.
//! The resource tag binds a token to one collection so it cannot be replayed
//! against another.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::{QueryError, Result};
use crate::query::params::NEXT_TOKEN_KEY;

#[derive(Debug, Serialize, Deserialize)]
struct CursorToken {
    cursor: String,
    resource: String,
}

/// Reasons a token is rejected. Never leaves this module.
#[derive(Debug, Error)]
enum DecodeError {
    #[error("not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("not a cursor record: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("minted for resource '{found}', expected '{expected}'")]
    ResourceMismatch { expected: String, found: String },
}

/// Mint a token for `position` in the `resource` collection.
///
/// # Errors
///
/// `INTERNAL` if the cursor record cannot be serialized.
pub fn mint(position: &str, resource: &str) -> Result<String> {
    let token = CursorToken {
        cursor: position.to_string(),
        resource: resource.to_string(),
    };
    let payload = serde_json::to_vec(&token)
        .map_err(|e| QueryError::internal(format!("failed to encode cursor: {}", e)))?;
    Ok(STANDARD.encode(payload))
}

/// Verify `token` against `expected_resource` and return its position marker.
///
/// # Errors
///
/// `INVALID_PARAMETER_VALUE` on `nextToken` for every failure: bad base64,
/// a payload that is not a `{cursor, resource}` record of strings, or a
/// resource tag other than `expected_resource`.
pub fn verify(token: &str, expected_resource: &str) -> Result<String> {
    decode(token, expected_resource).map_err(|err| {
        tracing::debug!(
            resource = expected_resource,
            reason = %err,
            "rejected pagination token"
        );
        QueryError::invalid_parameter_value(NEXT_TOKEN_KEY, token)
    })
}

fn decode(token: &str, expected_resource: &str) -> std::result::Result<String, DecodeError> {
    let bytes = STANDARD.decode(token)?;
    let decoded: CursorToken = serde_json::from_slice(&bytes)?;

    if decoded.resource != expected_resource {
        return Err(DecodeError::ResourceMismatch {
            expected: expected_resource.to_string(),
            found: decoded.resource,
        });
    }

    Ok(decoded.cursor)
}
