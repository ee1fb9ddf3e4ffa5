//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the lead endpoints, the health probes and the schema
//! wrappers from [`crate::inbound::http::schemas`]. The document is served by
//! Swagger UI in debug builds and printed by the `openapi-dump` binary.

use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, FlattenedErrorsSchema, LeadSchema, LeadSubmissionSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Barbershop lead intake API",
        description = "Collects callback requests from the landing page and lists them for staff."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::leads::create_lead,
        crate::inbound::http::leads::list_leads,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        LeadSubmissionSchema,
        LeadSchema,
        ErrorSchema,
        ErrorCodeSchema,
        FlattenedErrorsSchema
    )),
    tags(
        (name = "leads", description = "Callback requests submitted through the landing page"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
