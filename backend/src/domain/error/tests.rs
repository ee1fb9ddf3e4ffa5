//! Tests for domain error construction.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;
use uuid::Uuid;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn base_error() -> Error {
    Error::invalid_request("Invalid input")
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn new_falls_back_to_code_name_for_blank_messages() {
    let error = Error::new(ErrorCode::InternalError, "");
    assert_eq!(error.message(), "internal_error");
}

#[rstest]
fn with_trace_id_replaces_captured_id(base_error: Error) {
    let error = base_error.with_trace_id(TRACE_ID);
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn new_returns_none_when_trace_id_out_of_scope() {
    let error = Error::internal("boom");
    assert!(error.trace_id().is_none());
}

#[tokio::test]
async fn new_captures_scoped_trace_id() {
    let trace_id = TraceId::from_uuid(Uuid::nil());
    let error = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn with_details_keeps_message(base_error: Error) {
    let error = base_error.with_details(json!({ "formErrors": [] }));
    assert_eq!(error.message(), "Invalid input");
    assert_eq!(error.details(), Some(&json!({ "formErrors": [] })));
}

#[rstest]
fn display_includes_code_and_message() {
    let error = Error::internal("storage offline");
    assert_eq!(error.to_string(), "internal_error: storage offline");
}

#[rstest]
fn code_serialises_as_snake_case() {
    let value = serde_json::to_value(ErrorCode::InvalidRequest).expect("serialise code");
    assert_eq!(value, json!("invalid_request"));
}
