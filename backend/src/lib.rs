//! Lead intake backend library modules.
//!
//! The crate follows a hexagonal layout: [`domain`] holds validation rules,
//! the lead service and its ports; [`inbound`] adapts HTTP requests onto the
//! driving ports; [`outbound`] implements lead storage in memory and in
//! PostgreSQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
