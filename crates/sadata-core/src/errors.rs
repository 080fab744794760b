use sadata_core_types::RequestId;
use serde::Serialize;

/// Result type alias using QueryError
pub type Result<T> = std::result::Result<T, QueryError>;

/// Response status class an error maps to at the HTTP boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpStatus {
    BadRequest,
    NotFound,
    InternalServerError,
}

impl HttpStatus {
    /// Numeric status code
    pub fn code(&self) -> u16 {
        match self {
            HttpStatus::BadRequest => 400,
            HttpStatus::NotFound => 404,
            HttpStatus::InternalServerError => 500,
        }
    }
}

/// Canonical error kind taxonomy
///
/// Every kind except `Internal` is a client-input error: the caller can fix
/// the request and retry. Each kind maps to a stable wire code which is what
/// clients see in the `error` field of an error response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryErrorKind {
    // Parameter shape
    InvalidParameterValue,
    InvalidParameterCombination,
    EmptyParameterValue,
    MultipleParameterValues,
    MissingParameterValue,
    UnknownParameter,

    // Filters
    DuplicateFilterKey,
    UnknownFilterKey,
    TooManyFilterValues,
    NoFilterValues,
    InvalidFilterValue,

    // Resources
    NoResourceIdValues,
    ResourceNotFound,
    ResourceIdMalformed,

    // Internal
    Internal,
}

impl QueryErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            QueryErrorKind::InvalidParameterValue => "INVALID_PARAMETER_VALUE",
            QueryErrorKind::InvalidParameterCombination => "INVALID_PARAMETER_COMBINATION",
            QueryErrorKind::EmptyParameterValue => "EMPTY_PARAMETER_VALUE",
            QueryErrorKind::MultipleParameterValues => "MULTIPLE_PARAMETER_VALUES",
            QueryErrorKind::MissingParameterValue => "MISSING_PARAMETER_VALUE",
            QueryErrorKind::UnknownParameter => "UNKNOWN_PARAMETER",
            QueryErrorKind::DuplicateFilterKey => "DUPLICATE_FILTER_KEY",
            QueryErrorKind::UnknownFilterKey => "UNKNOWN_FILTER_KEY",
            QueryErrorKind::TooManyFilterValues => "TOO_MANY_FILTER_VALUES",
            QueryErrorKind::NoFilterValues => "NO_FILTER_VALUES",
            QueryErrorKind::InvalidFilterValue => "INVALID_FILTER_VALUE",
            QueryErrorKind::NoResourceIdValues => "NO_RESOURCE_ID_VALUES",
            QueryErrorKind::ResourceNotFound => "RESOURCE_NOT_FOUND",
            QueryErrorKind::ResourceIdMalformed => "RESOURCE_ID_MALFORMED",
            QueryErrorKind::Internal => "INTERNAL",
        }
    }

    /// Status class this kind is surfaced with
    pub fn status(&self) -> HttpStatus {
        match self {
            QueryErrorKind::ResourceNotFound => HttpStatus::NotFound,
            QueryErrorKind::Internal => HttpStatus::InternalServerError,
            _ => HttpStatus::BadRequest,
        }
    }

    /// Whether the caller can recover by fixing the request
    pub fn is_client_error(&self) -> bool {
        !matches!(self, QueryErrorKind::Internal)
    }
}

impl std::fmt::Display for QueryErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Canonical structured error type
///
/// Carries the kind, the offending parameter or filter name when there is
/// one, and a human-readable message. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryError {
    kind: QueryErrorKind,
    op: Option<String>,
    parameter: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl QueryError {
    /// Create a new error with the specified kind
    pub fn new(kind: QueryErrorKind) -> Self {
        Self {
            kind,
            op: None,
            parameter: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the offending parameter or filter name
    pub fn with_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameter = Some(parameter.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> QueryErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the status class
    pub fn status(&self) -> HttpStatus {
        self.kind.status()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the offending parameter or filter name, if any
    pub fn parameter(&self) -> Option<&str> {
        self.parameter.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

// ========== Constructors ==========

impl QueryError {
    pub fn invalid_parameter_value(parameter: &str, value: &str) -> Self {
        Self::new(QueryErrorKind::InvalidParameterValue)
            .with_parameter(parameter)
            .with_message(format!(
                "Invalid parameter value : {} , for query parameter : {}",
                value, parameter
            ))
    }

    pub fn invalid_filter_value(filter: &str, value: &str) -> Self {
        Self::new(QueryErrorKind::InvalidFilterValue)
            .with_parameter(filter)
            .with_message(format!(
                "Invalid filter value : {} , for query filter : {}",
                value, filter
            ))
    }

    /// `first` is reported as the offending parameter.
    pub fn invalid_parameter_combination(first: &str, second: &str) -> Self {
        Self::new(QueryErrorKind::InvalidParameterCombination)
            .with_parameter(first)
            .with_message(format!(
                "Invalid parameter combination, query parameters : [{}, {}] cannot be specified together",
                first, second
            ))
    }

    pub fn empty_parameter_value(parameter: &str) -> Self {
        Self::new(QueryErrorKind::EmptyParameterValue)
            .with_parameter(parameter)
            .with_message(format!(
                "Query parameter : {} , cannot have an empty value",
                parameter
            ))
    }

    pub fn multiple_parameter_values(parameter: &str) -> Self {
        Self::new(QueryErrorKind::MultipleParameterValues)
            .with_parameter(parameter)
            .with_message(format!(
                "Query parameter : {} , cannot have more than one value",
                parameter
            ))
    }

    pub fn missing_parameter(parameter: &str) -> Self {
        Self::new(QueryErrorKind::MissingParameterValue)
            .with_parameter(parameter)
            .with_message(format!("Query parameter : {} , is required", parameter))
    }

    pub fn unknown_parameter(parameter: &str) -> Self {
        Self::new(QueryErrorKind::UnknownParameter)
            .with_parameter(parameter)
            .with_message(format!("Unknown parameter name : {}", parameter))
    }

    pub fn duplicate_filter_key(filter: &str) -> Self {
        Self::new(QueryErrorKind::DuplicateFilterKey)
            .with_parameter(filter)
            .with_message(format!(
                "Filter key : {}, has been specified more than once",
                filter
            ))
    }

    pub fn unknown_filter_key(filter: &str) -> Self {
        Self::new(QueryErrorKind::UnknownFilterKey)
            .with_parameter(filter)
            .with_message(format!("Unknown filter key : {}", filter))
    }

    pub fn too_many_filter_values(filter: &str, maximum: usize) -> Self {
        Self::new(QueryErrorKind::TooManyFilterValues)
            .with_parameter(filter)
            .with_message(format!(
                "Too many filter values for filter : {} , a maximum of {} values is allowed",
                filter, maximum
            ))
    }

    pub fn no_filter_values(filter: &str) -> Self {
        Self::new(QueryErrorKind::NoFilterValues)
            .with_parameter(filter)
            .with_message(format!("No filter values for filter : {}", filter))
    }

    pub fn no_resource_id_values(parameter: &str) -> Self {
        Self::new(QueryErrorKind::NoResourceIdValues)
            .with_parameter(parameter)
            .with_message("No resource id values specified")
    }

    pub fn resource_not_found(resource_id: &str) -> Self {
        Self::new(QueryErrorKind::ResourceNotFound)
            .with_parameter(resource_id)
            .with_message("The resource does not exist")
    }

    pub fn resource_id_malformed(resource: &str, resource_id: &str) -> Self {
        Self::new(QueryErrorKind::ResourceIdMalformed)
            .with_parameter(resource_id)
            .with_message(format!(
                "Malformed {} id : {}",
                resource.to_lowercase(),
                resource_id
            ))
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(QueryErrorKind::Internal).with_message(message)
    }
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(parameter) = &self.parameter {
            write!(f, " (parameter: {})", parameter)?;
        }
        Ok(())
    }
}

impl std::error::Error for QueryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_context() {
        let request_id = RequestId::from_string("req-1".to_string());
        let err = QueryError::new(QueryErrorKind::Internal)
            .with_op("list")
            .with_parameter("p")
            .with_request_id(request_id.clone())
            .with_message("boom");

        assert_eq!(err.kind(), QueryErrorKind::Internal);
        assert_eq!(err.op(), Some("list"));
        assert_eq!(err.parameter(), Some("p"));
        assert_eq!(err.request_id(), Some(&request_id));
        assert_eq!(err.message(), "boom");
    }

    #[test]
    fn test_display_includes_code_and_parameter() {
        let err = QueryError::unknown_parameter("foo");
        let rendered = err.to_string();
        assert!(rendered.starts_with("[UNKNOWN_PARAMETER]"));
        assert!(rendered.contains("(parameter: foo)"));
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            QueryErrorKind::ResourceNotFound.status(),
            HttpStatus::NotFound
        );
        assert_eq!(
            QueryErrorKind::ResourceIdMalformed.status(),
            HttpStatus::BadRequest
        );
        assert_eq!(
            QueryErrorKind::Internal.status(),
            HttpStatus::InternalServerError
        );
        assert_eq!(HttpStatus::InternalServerError.code(), 500);
    }

    #[test]
    fn test_kind_serializes_as_code() {
        let json = serde_json::to_string(&QueryErrorKind::TooManyFilterValues).unwrap();
        assert_eq!(json, "\"TOO_MANY_FILTER_VALUES\"");
    }
}
