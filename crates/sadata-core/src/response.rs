//! JSON envelopes returned to clients.

use serde::Serialize;

use crate::core_types::RequestId;
use crate::errors::{HttpStatus, QueryError, QueryErrorKind};
use crate::pagination::Page;

/// Successful response: `{"requestId", "data", "nextToken"?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response<T> {
    pub request_id: RequestId,
    pub data: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl<T> Response<T> {
    pub fn new(request_id: RequestId, data: Vec<T>) -> Self {
        Self {
            request_id,
            data,
            next_token: None,
        }
    }

    pub fn from_page(request_id: RequestId, page: Page<T>) -> Self {
        Self {
            request_id,
            data: page.data,
            next_token: page.next_token,
        }
    }
}

/// Error response: `{"requestId", "error", "message"}`.
///
/// Internal errors are reduced to a generic code and message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub request_id: RequestId,
    pub error: String,
    pub message: String,
    #[serde(skip)]
    status: HttpStatus,
}

impl ErrorResponse {
    pub const INTERNAL_ERROR: &'static str = "INTERNAL_SERVER_ERROR";
    pub const INTERNAL_MESSAGE: &'static str = "Internal server error";

    pub fn from_error(request_id: RequestId, err: &QueryError) -> Self {
        let (error, message) = match err.kind() {
            QueryErrorKind::Internal => (
                Self::INTERNAL_ERROR.to_string(),
                Self::INTERNAL_MESSAGE.to_string(),
            ),
            kind => (kind.code().to_string(), err.message().to_string()),
        };
        Self {
            request_id,
            error,
            message,
            status: err.status(),
        }
    }

    pub fn status(&self) -> HttpStatus {
        self.status
    }
}
