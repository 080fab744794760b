use sadata_core::core_types::RequestId;
use sadata_core::errors::{HttpStatus, QueryError, QueryErrorKind};

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (QueryErrorKind::InvalidParameterValue, "INVALID_PARAMETER_VALUE"),
        (QueryErrorKind::InvalidParameterCombination, "INVALID_PARAMETER_COMBINATION"),
        (QueryErrorKind::EmptyParameterValue, "EMPTY_PARAMETER_VALUE"),
        (QueryErrorKind::MultipleParameterValues, "MULTIPLE_PARAMETER_VALUES"),
        (QueryErrorKind::MissingParameterValue, "MISSING_PARAMETER_VALUE"),
        (QueryErrorKind::UnknownParameter, "UNKNOWN_PARAMETER"),
        (QueryErrorKind::DuplicateFilterKey, "DUPLICATE_FILTER_KEY"),
        (QueryErrorKind::UnknownFilterKey, "UNKNOWN_FILTER_KEY"),
        (QueryErrorKind::TooManyFilterValues, "TOO_MANY_FILTER_VALUES"),
        (QueryErrorKind::NoFilterValues, "NO_FILTER_VALUES"),
        (QueryErrorKind::InvalidFilterValue, "INVALID_FILTER_VALUE"),
        (QueryErrorKind::NoResourceIdValues, "NO_RESOURCE_ID_VALUES"),
        (QueryErrorKind::ResourceNotFound, "RESOURCE_NOT_FOUND"),
        (QueryErrorKind::ResourceIdMalformed, "RESOURCE_ID_MALFORMED"),
        (QueryErrorKind::Internal, "INTERNAL"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
        assert_eq!(kind.to_string(), expected_code);
    }
}

#[test]
fn test_status_classes() {
    assert_eq!(QueryErrorKind::ResourceNotFound.status(), HttpStatus::NotFound);
    assert_eq!(QueryErrorKind::ResourceIdMalformed.status(), HttpStatus::BadRequest);
    assert_eq!(QueryErrorKind::UnknownParameter.status(), HttpStatus::BadRequest);
    assert_eq!(QueryErrorKind::Internal.status(), HttpStatus::InternalServerError);
    assert_eq!(HttpStatus::NotFound.code(), 404);
}

#[test]
fn test_only_internal_is_not_client_error() {
    assert!(!QueryErrorKind::Internal.is_client_error());
    assert!(QueryErrorKind::ResourceNotFound.is_client_error());
}

#[test]
fn test_constructor_carries_parameter_and_message() {
    let err = QueryError::invalid_parameter_combination("schoolId", "maxResults");
    assert_eq!(err.kind(), QueryErrorKind::InvalidParameterCombination);
    assert_eq!(err.parameter(), Some("schoolId"));
    assert!(err.message().contains("[schoolId, maxResults]"));
}

#[test]
fn test_builder_context() {
    let request_id = RequestId::from_string("req-1".to_string());
    let err = QueryError::resource_not_found("99")
        .with_op("get_resource")
        .with_request_id(request_id.clone());

    assert_eq!(err.op(), Some("get_resource"));
    assert_eq!(err.request_id(), Some(&request_id));
    assert_eq!(err.status().code(), 404);
}

#[test]
fn test_display_format() {
    let err = QueryError::unknown_parameter("foo").with_op("list_resources");
    assert_eq!(
        err.to_string(),
        "[UNKNOWN_PARAMETER] in operation 'list_resources': Unknown parameter name : foo (parameter: foo)"
    );
}

#[test]
fn test_malformed_id_message() {
    let err = QueryError::resource_id_malformed("Hospital", "abc");
    assert_eq!(err.kind(), QueryErrorKind::ResourceIdMalformed);
    assert_eq!(err.message(), "Malformed hospital id : abc");
}
