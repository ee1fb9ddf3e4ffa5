//! Submission client for the lead intake service.

use std::time::Duration;

use async_trait::async_trait;
use lead_contract::{ErrorBody, LeadRecord, LeadSubmission};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;

const LEADS_PATH: &str = "/api/leads";

/// Failure talking to the lead intake service.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The service answered with a non-success status.
    #[error("lead service responded with status {status}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Decoded error envelope, when the body carried one.
        body: Option<Box<ErrorBody>>,
    },
    /// The request did not complete or the response could not be decoded.
    #[error("lead service request failed: {message}")]
    Transport {
        /// Description of the underlying failure.
        message: String,
    },
}

impl SubmitError {
    /// Build a transport error from any displayable failure.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// HTTP status for rejections.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Transport { .. } => None,
        }
    }

    /// Error envelope returned with a rejection, if any.
    #[must_use]
    pub fn body(&self) -> Option<&ErrorBody> {
        match self {
            Self::Rejected { body, .. } => body.as_deref(),
            Self::Transport { .. } => None,
        }
    }
}

/// Port for the two lead endpoints.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadsApi: Send + Sync {
    /// Submit a lead and return the stored record.
    async fn create_lead(&self, submission: &LeadSubmission) -> Result<LeadRecord, SubmitError>;

    /// Fetch every stored lead.
    async fn list_leads(&self) -> Result<Vec<LeadRecord>, SubmitError>;
}

/// [`LeadsApi`] over HTTP using `reqwest`.
///
/// Requests have no deadline unless one is set with
/// [`HttpLeadsClient::with_timeout`].
#[derive(Debug, Clone)]
pub struct HttpLeadsClient {
    client: Client,
    endpoint: Url,
}

impl HttpLeadsClient {
    /// Build a client for the service rooted at `base_url`.
    ///
    /// # Errors
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, reqwest::Error> {
        Ok(Self::from_client(Client::builder().build()?, base_url))
    }

    /// Build a client that abandons requests after `timeout`.
    ///
    /// # Errors
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_timeout(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self::from_client(
            Client::builder().timeout(timeout).build()?,
            base_url,
        ))
    }

    fn from_client(client: Client, base_url: Url) -> Self {
        let mut endpoint = base_url;
        endpoint.set_path(LEADS_PATH);
        endpoint.set_query(None);
        Self { client, endpoint }
    }

    /// URL the client sends lead requests to.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl LeadsApi for HttpLeadsClient {
    async fn create_lead(&self, submission: &LeadSubmission) -> Result<LeadRecord, SubmitError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(submission)
            .send()
            .await
            .map_err(map_transport_error)?;
        decode_response(response).await
    }

    async fn list_leads(&self) -> Result<Vec<LeadRecord>, SubmitError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(map_transport_error)?;
        decode_response(response).await
    }
}

fn map_transport_error(error: reqwest::Error) -> SubmitError {
    SubmitError::transport(error.to_string())
}

/// Any 2xx is decoded as `T`; everything else is a rejection.
async fn decode_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, SubmitError> {
    let status = response.status();
    let body = response.bytes().await.map_err(map_transport_error)?;
    if !status.is_success() {
        return Err(rejection(status, body.as_ref()));
    }
    serde_json::from_slice(body.as_ref())
        .map_err(|error| SubmitError::transport(format!("invalid response body: {error}")))
}

fn rejection(status: StatusCode, body: &[u8]) -> SubmitError {
    let envelope = serde_json::from_slice::<ErrorBody>(body).ok();
    warn!(
        status = status.as_u16(),
        trace_id = envelope.as_ref().and_then(|e| e.trace_id.as_deref()),
        "lead service rejected request"
    );
    SubmitError::Rejected {
        status: status.as_u16(),
        body: envelope.map(Box::new),
    }
}
