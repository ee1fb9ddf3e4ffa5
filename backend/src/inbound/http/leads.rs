//! Lead API handlers.
//!
//! ```text
//! POST /api/leads {"name":"Ana","phone":"+34 600 111 222"}
//! GET /api/leads
//! ```
//!
//! The submission body is taken as untyped JSON; narrowing and validation
//! happen in the domain service so every field problem is reported at once.

use actix_web::{HttpResponse, get, post, web};
use serde_json::Value;

use crate::domain::Lead;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Capture a lead from the landing page form.
#[utoipa::path(
    post,
    path = "/api/leads",
    request_body = crate::inbound::http::schemas::LeadSubmissionSchema,
    responses(
        (status = 201, description = "Lead stored", body = crate::inbound::http::schemas::LeadSchema),
        (status = 400, description = "Invalid input", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["leads"],
    operation_id = "createLead"
)]
#[post("/leads")]
pub async fn create_lead(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let lead = state.submissions.submit(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(lead))
}

/// List captured leads in creation order.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use lead_intake::inbound::http::leads::list_leads;
///
/// let app = App::new().service(list_leads);
/// ```
#[utoipa::path(
    get,
    path = "/api/leads",
    responses(
        (status = 200, description = "Stored leads", body = [crate::inbound::http::schemas::LeadSchema]),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["leads"],
    operation_id = "listLeads"
)]
#[get("/leads")]
pub async fn list_leads(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Lead>>> {
    let leads = state.leads.list_leads().await?;
    Ok(web::Json(leads))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use chrono::Utc;
    use lead_contract::ErrorBody;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::domain::ports::{MockLeadSubmissionCommand, MockLeadsQuery};
    use crate::domain::{Error, LeadId, LeadName, NewLead, PhoneNumber};
    use crate::inbound::http::api_scope;

    fn lead(name: &str) -> Lead {
        Lead::new(
            LeadId::random(),
            NewLead::new(
                LeadName::new(name).expect("fixture name"),
                PhoneNumber::new("600111222").expect("fixture phone"),
            ),
            Utc::now(),
        )
    }

    fn state(submissions: MockLeadSubmissionCommand, leads: MockLeadsQuery) -> HttpState {
        HttpState::new(Arc::new(submissions), Arc::new(leads))
    }

    macro_rules! app {
        ($state:expr) => {
            actix_test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .service(api_scope()),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn create_returns_201_with_stored_lead() {
        let stored = lead("Ana");
        let expected_id = stored.id();
        let mut submissions = MockLeadSubmissionCommand::new();
        submissions
            .expect_submit()
            .withf(|payload| payload["name"] == "Ana")
            .times(1)
            .return_once(move |_| Ok(stored));

        let app = app!(state(submissions, MockLeadsQuery::new()));
        let request = actix_test::TestRequest::post()
            .uri("/api/leads")
            .set_json(json!({ "name": "Ana", "phone": "600111222" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["id"], json!(expected_id.to_string()));
        assert!(body["createdAt"].is_string());
    }

    #[actix_web::test]
    async fn create_maps_validation_failure_to_400() {
        let mut submissions = MockLeadSubmissionCommand::new();
        submissions.expect_submit().times(1).return_once(|_| {
            Err(Error::invalid_request("Invalid input")
                .with_details(json!({ "formErrors": [], "fieldErrors": { "name": ["name is required"] } })))
        });

        let app = app!(state(submissions, MockLeadsQuery::new()));
        let request = actix_test::TestRequest::post()
            .uri("/api/leads")
            .set_json(json!({ "phone": "600111222" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorBody = actix_test::read_body_json(response).await;
        assert_eq!(body.error, "Invalid input");
        assert!(body.validation_details().is_some());
    }

    #[rstest]
    #[case("not json", "application/json")]
    #[case("{\"name\":\"Ana\"", "application/json")]
    #[case("{\"name\":\"Ana\",\"phone\":\"600111222\"}", "text/plain")]
    #[actix_web::test]
    async fn unreadable_bodies_never_reach_the_service(
        #[case] body: &'static str,
        #[case] content_type: &'static str,
    ) {
        let mut submissions = MockLeadSubmissionCommand::new();
        submissions.expect_submit().never();

        let app = app!(state(submissions, MockLeadsQuery::new()));
        let request = actix_test::TestRequest::post()
            .uri("/api/leads")
            .insert_header(("content-type", content_type))
            .set_payload(body)
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorBody = actix_test::read_body_json(response).await;
        assert_eq!(body.error, "Invalid input");
        let details = body.validation_details().expect("form error details");
        assert_eq!(details.form_errors.len(), 1);
    }

    #[actix_web::test]
    async fn create_redacts_internal_failures() {
        let mut submissions = MockLeadSubmissionCommand::new();
        submissions
            .expect_submit()
            .times(1)
            .return_once(|_| Err(Error::internal("lead create failed: disk full")));

        let app = app!(state(submissions, MockLeadsQuery::new()));
        let request = actix_test::TestRequest::post()
            .uri("/api/leads")
            .set_json(json!({ "name": "Ana", "phone": "600111222" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorBody = actix_test::read_body_json(response).await;
        assert_eq!(body.error, "Internal server error");
        assert!(body.details.is_none());
    }

    #[actix_web::test]
    async fn list_returns_leads_in_order() {
        let leads = vec![lead("Ana"), lead("Bo")];
        let mut query = MockLeadsQuery::new();
        query
            .expect_list_leads()
            .times(1)
            .return_once(move || Ok(leads));

        let app = app!(state(MockLeadSubmissionCommand::new(), query));
        let request = actix_test::TestRequest::get().uri("/api/leads").to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Vec<Value> = actix_test::read_body_json(response).await;
        let names: Vec<&str> = body.iter().filter_map(|lead| lead["name"].as_str()).collect();
        assert_eq!(names, ["Ana", "Bo"]);
    }

    #[actix_web::test]
    async fn unknown_api_routes_return_json_404() {
        let app = app!(state(MockLeadSubmissionCommand::new(), MockLeadsQuery::new()));
        let request = actix_test::TestRequest::get().uri("/api/unknown").to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: ErrorBody = actix_test::read_body_json(response).await;
        assert_eq!(body.code.as_deref(), Some("not_found"));
    }
}
