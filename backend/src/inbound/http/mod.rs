//! HTTP inbound adapter exposing REST endpoints.

use actix_web::{Scope, web};

pub mod error;
pub mod health;
pub mod leads;
pub mod schemas;
pub mod state;

pub use error::ApiResult;

/// Upper bound on accepted JSON bodies. A lead is two short strings.
pub const JSON_BODY_LIMIT: usize = 16 * 1024;

/// Build the `/api` scope.
///
/// Registers the lead routes, turns unreadable JSON bodies into the
/// invalid-input envelope, and answers unknown `/api` paths with a JSON 404.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use lead_intake::inbound::http::api_scope;
///
/// let _app = App::new().service(api_scope());
/// ```
pub fn api_scope() -> Scope {
    web::scope("/api")
        .app_data(
            web::JsonConfig::default()
                .limit(JSON_BODY_LIMIT)
                .error_handler(error::json_error_handler),
        )
        .service(leads::create_lead)
        .service(leads::list_leads)
        .default_service(web::to(error::api_not_found))
}
