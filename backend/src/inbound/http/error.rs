//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into the shared JSON envelope
//! (`{error, code, details?, traceId?}`) and matching status codes.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use lead_contract::ErrorBody;
use tracing::debug;

use crate::domain::{Error, ErrorCode, LeadValidationError, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message sent in place of any internal failure detail.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Build the wire envelope for `error`.
///
/// Internal errors keep their trace identifier but lose message and details.
pub fn error_body(error: &Error) -> ErrorBody {
    let internal = matches!(error.code(), ErrorCode::InternalError);
    ErrorBody {
        error: if internal {
            INTERNAL_ERROR_MESSAGE.to_owned()
        } else {
            error.message().to_owned()
        },
        code: Some(error.code().as_str().to_owned()),
        details: if internal {
            None
        } else {
            error.details().cloned()
        },
        trace_id: error.trace_id().map(str::to_owned),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(error_body(self))
    }
}

/// `JsonConfig` error handler: unreadable bodies become the invalid-input
/// envelope with a form-level message.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::ContentType => "expected an application/json request body",
        JsonPayloadError::Deserialize(_) | JsonPayloadError::Serialize(_) => {
            "request body is not valid JSON"
        }
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            "request body is too large"
        }
        _ => "request body could not be read",
    };
    debug!(error = %err, "rejected unreadable request body");
    Error::from(LeadValidationError::form(message)).into()
}

/// Fallback for unknown `/api` routes.
pub async fn api_not_found() -> ApiResult<HttpResponse> {
    Err(Error::not_found("Not found"))
}
