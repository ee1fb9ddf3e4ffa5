//! Behaviour tests for the lead intake endpoints.
//!
//! Each request step builds a fresh Actix service around the shared
//! [`HttpState`], so leads stored in one step are visible to the next.

use std::cell::RefCell;
use std::sync::Arc;

use actix_web::http::header::ContentType;
use actix_web::test as actix_test;
use actix_web::{App, web};
use async_trait::async_trait;
use lead_intake::Trace;
use lead_intake::domain::ports::{LeadRepository, LeadRepositoryError};
use lead_intake::domain::{Lead, LeadIntakeService, NewLead, TRACE_ID_HEADER};
use lead_intake::inbound::http::api_scope;
use lead_intake::inbound::http::state::HttpState;
use lead_intake::outbound::memory::InMemoryLeadRepository;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};

struct UnavailableLeadRepository;

#[async_trait]
impl LeadRepository for UnavailableLeadRepository {
    async fn create(&self, _lead: NewLead) -> Result<Lead, LeadRepositoryError> {
        Err(LeadRepositoryError::connection("connection refused by 10.0.0.5"))
    }

    async fn list(&self) -> Result<Vec<Lead>, LeadRepositoryError> {
        Err(LeadRepositoryError::connection("connection refused by 10.0.0.5"))
    }
}

enum RequestBody {
    Json(Value),
    Raw(String),
}

struct Captured {
    status: u16,
    trace_id: Option<String>,
    body: Value,
}

#[derive(Default)]
struct LeadWorld {
    state: RefCell<Option<HttpState>>,
    last: RefCell<Option<Captured>>,
}

impl LeadWorld {
    fn use_repository<R: LeadRepository + 'static>(&self, repository: R) {
        let service = LeadIntakeService::new(Arc::new(repository));
        *self.state.borrow_mut() = Some(HttpState::from_service(Arc::new(service)));
    }

    fn state(&self) -> HttpState {
        self.state
            .borrow()
            .clone()
            .expect("a lead store should be configured")
    }

    fn send(&self, method: actix_web::http::Method, body: Option<RequestBody>) -> Captured {
        let state = self.state();
        actix_rt::System::new().block_on(async move {
            let app = actix_test::init_service(
                App::new()
                    .app_data(web::Data::new(state))
                    .wrap(Trace)
                    .service(api_scope()),
            )
            .await;
            let request = actix_test::TestRequest::default()
                .method(method)
                .uri("/api/leads");
            let request = match body {
                Some(RequestBody::Json(value)) => request.set_json(value),
                Some(RequestBody::Raw(raw)) => request
                    .insert_header(ContentType::json())
                    .set_payload(raw),
                None => request,
            };
            let response = actix_test::call_service(&app, request.to_request()).await;
            let status = response.status().as_u16();
            let trace_id = response
                .headers()
                .get(TRACE_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let bytes = actix_test::read_body(response).await;
            let body = serde_json::from_slice(&bytes).expect("json body");
            Captured {
                status,
                trace_id,
                body,
            }
        })
    }

    fn submit(&self, body: RequestBody) {
        let captured = self.send(actix_web::http::Method::POST, Some(body));
        *self.last.borrow_mut() = Some(captured);
    }

    fn with_last<T>(&self, f: impl FnOnce(&Captured) -> T) -> T {
        let last = self.last.borrow();
        f(last.as_ref().expect("a request should have been sent"))
    }
}

fn unquote(value: &str) -> &str {
    value.trim_matches('"')
}

#[fixture]
fn world() -> LeadWorld {
    LeadWorld::default()
}

#[given("an empty lead store")]
fn an_empty_lead_store(world: &LeadWorld) {
    world.use_repository(InMemoryLeadRepository::new());
}

#[given("a lead store that is unavailable")]
fn a_lead_store_that_is_unavailable(world: &LeadWorld) {
    world.use_repository(UnavailableLeadRepository);
}

#[when("a visitor submits name {name} and phone {phone}")]
fn a_visitor_submits(world: &LeadWorld, name: String, phone: String) {
    world.submit(RequestBody::Json(json!({
        "name": unquote(&name),
        "phone": unquote(&phone),
    })));
}

#[when("a visitor sends the raw body {body}")]
fn a_visitor_sends_raw_body(world: &LeadWorld, body: String) {
    world.submit(RequestBody::Raw(unquote(&body).to_owned()));
}

#[then("the response status is {status}")]
fn the_response_status_is(world: &LeadWorld, status: u16) {
    world.with_last(|last| assert_eq!(last.status, status, "body: {}", last.body));
}

#[then("the response carries a trace identifier")]
fn the_response_carries_a_trace_identifier(world: &LeadWorld) {
    world.with_last(|last| {
        let trace_id = last.trace_id.as_deref().expect("trace-id header");
        assert!(uuid::Uuid::parse_str(trace_id).is_ok());
    });
}

#[then("the stored lead has name {name}")]
fn the_stored_lead_has_name(world: &LeadWorld, name: String) {
    world.with_last(|last| {
        assert_eq!(last.body["name"], unquote(&name));
        assert!(last.body["id"].is_string(), "id should be assigned");
    });
}

#[then("the error names the field {field}")]
fn the_error_names_the_field(world: &LeadWorld, field: String) {
    world.with_last(|last| {
        let messages = last.body["details"]["fieldErrors"][unquote(&field)]
            .as_array()
            .expect("field errors for the named field");
        assert!(!messages.is_empty());
    });
}

#[then("the error message is {message}")]
fn the_error_message_is(world: &LeadWorld, message: String) {
    world.with_last(|last| assert_eq!(last.body["error"], unquote(&message)));
}

#[then("the error has no details")]
fn the_error_has_no_details(world: &LeadWorld) {
    world.with_last(|last| {
        assert!(last.body.get("details").is_none());
        let text = last.body.to_string();
        assert!(!text.contains("10.0.0.5"), "storage detail leaked: {text}");
    });
}

#[then("the number of listed leads is {count}")]
fn the_number_of_listed_leads_is(world: &LeadWorld, count: usize) {
    let captured = world.send(actix_web::http::Method::GET, None);
    assert_eq!(captured.status, 200);
    let leads = captured.body.as_array().expect("array of leads");
    assert_eq!(leads.len(), count);
}

#[scenario(
    path = "tests/features/lead_intake.feature",
    name = "A valid lead is stored and listed"
)]
fn a_valid_lead_is_stored_and_listed(world: LeadWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/lead_intake.feature",
    name = "A short phone number is rejected without storing anything"
)]
fn a_short_phone_number_is_rejected(world: LeadWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/lead_intake.feature",
    name = "A malformed body is rejected as invalid input"
)]
fn a_malformed_body_is_rejected(world: LeadWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/lead_intake.feature",
    name = "Storage failures are reported without internal details"
)]
fn storage_failures_are_reported_without_details(world: LeadWorld) {
    drop(world);
}
