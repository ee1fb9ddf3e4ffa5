//! Tests for the lead intake service.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use lead_contract::{FlattenedErrors, LeadField};
use rstest::rstest;
use serde_json::json;
use uuid::Uuid;

use super::*;
use crate::domain::ports::MockLeadRepository;
use crate::domain::{ErrorCode, LeadId, LeadName, PhoneNumber};
use crate::outbound::memory::InMemoryLeadRepository;

fn make_service(repo: MockLeadRepository) -> LeadIntakeService<MockLeadRepository> {
    LeadIntakeService::new(Arc::new(repo))
}

fn stored(name: &str, phone: &str) -> Lead {
    Lead::new(
        LeadId::random(),
        NewLead::new(
            LeadName::new(name).expect("fixture name"),
            PhoneNumber::new(phone).expect("fixture phone"),
        ),
        Utc::now(),
    )
}

fn details(error: &Error) -> FlattenedErrors {
    serde_json::from_value(error.details().cloned().expect("details present"))
        .expect("flattened errors")
}

#[tokio::test]
async fn submit_persists_trimmed_lead_once() {
    let created_at = Utc
        .with_ymd_and_hms(2026, 3, 14, 9, 30, 0)
        .single()
        .expect("fixed timestamp");
    let id = LeadId::from_uuid(Uuid::from_u128(0x2a));
    let mut repo = MockLeadRepository::new();
    repo.expect_create()
        .withf(|lead| lead.name().as_ref() == "Al" && lead.phone().as_ref() == "600 111 222")
        .times(1)
        .return_once(move |lead| Ok(Lead::new(id, lead, created_at)));

    let service = make_service(repo);
    let lead = service
        .submit(json!({ "name": " Al ", "phone": " 600 111 222 " }))
        .await
        .expect("submission succeeds");

    let expected = Lead::new(
        id,
        NewLead::new(
            LeadName::new("Al").expect("fixture name"),
            PhoneNumber::new("600 111 222").expect("fixture phone"),
        ),
        created_at,
    );
    assert_eq!(lead, expected);
    assert_eq!(lead.id(), id);
    assert_eq!(lead.created_at(), created_at);
}

#[tokio::test]
async fn identical_submissions_are_stored_separately() {
    let service = LeadIntakeService::new(Arc::new(InMemoryLeadRepository::new()));
    let payload = json!({ "name": "Ana", "phone": "600111222" });

    let first = service.submit(payload.clone()).await.expect("first submit");
    let second = service.submit(payload).await.expect("second submit");

    assert_ne!(first.id(), second.id());
    let leads = service.list_leads().await.expect("list succeeds");
    assert_eq!(leads, vec![first, second]);
}

#[rstest]
#[case(json!({ "name": "A", "phone": "600111222" }), vec![LeadField::Name])]
#[case(json!({ "name": "Al", "phone": "12345" }), vec![LeadField::Phone])]
#[case(json!({ "name": "Al", "phone": "600-111-222" }), vec![LeadField::Phone])]
#[case(json!({}), vec![LeadField::Name, LeadField::Phone])]
#[tokio::test]
async fn submit_rejects_invalid_payload_without_storage(
    #[case] payload: Value,
    #[case] failing: Vec<LeadField>,
) {
    let mut repo = MockLeadRepository::new();
    repo.expect_create().never();

    let service = make_service(repo);
    let error = service.submit(payload).await.expect_err("invalid payload");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.message(), "Invalid input");
    let flattened = details(&error);
    for field in LeadField::ALL {
        assert_eq!(
            flattened.field(field).is_empty(),
            !failing.contains(&field),
            "unexpected messages for {field}"
        );
    }
}

#[tokio::test]
async fn submit_rejects_non_object_body_with_form_error() {
    let mut repo = MockLeadRepository::new();
    repo.expect_create().never();

    let service = make_service(repo);
    let error = service
        .submit(json!(["Al", "600111222"]))
        .await
        .expect_err("array body");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    let flattened = details(&error);
    assert_eq!(flattened.form_errors.len(), 1);
    assert!(flattened.field_errors.is_empty());
}

#[rstest]
#[case(LeadRepositoryError::connection("pool exhausted"))]
#[case(LeadRepositoryError::query("relation \"leads\" does not exist"))]
#[tokio::test]
async fn submit_maps_storage_failure_to_internal(#[case] failure: LeadRepositoryError) {
    let mut repo = MockLeadRepository::new();
    repo.expect_create().times(1).return_once(move |_| Err(failure));

    let service = make_service(repo);
    let error = service
        .submit(json!({ "name": "Al", "phone": "600111222" }))
        .await
        .expect_err("storage failure");

    assert_eq!(error.code(), ErrorCode::InternalError);
    assert!(error.details().is_none());
}

#[tokio::test]
async fn list_returns_repository_order() {
    let first = stored("Ana", "600111222");
    let second = stored("Bo", "+34 600 333 444");
    let expected = vec![first.clone(), second.clone()];
    let mut repo = MockLeadRepository::new();
    repo.expect_list()
        .times(1)
        .return_once(move || Ok(vec![first, second]));

    let service = make_service(repo);
    let leads = service.list_leads().await.expect("list succeeds");

    assert_eq!(leads, expected);
}

#[tokio::test]
async fn list_maps_storage_failure_to_internal() {
    let mut repo = MockLeadRepository::new();
    repo.expect_list()
        .times(1)
        .return_once(|| Err(LeadRepositoryError::connection("refused")));

    let service = make_service(repo);
    let error = service.list_leads().await.expect_err("storage failure");

    assert_eq!(error.code(), ErrorCode::InternalError);
}
