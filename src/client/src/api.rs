//! Ledger API seam and its HTTP implementation.

use crate::errors::ClientError;
use crate::types::{TransferOutcome, UserDetailsOutcome};
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use tinytoken_core::types::{TransferRequest, TransferResult, User, UserId};
use tracing::debug;

/// The three backend operations the front-end consumes.
///
/// Implementations perform exactly one request per call: no retry, no
/// timeout, no cancellation.
#[async_trait]
pub trait LedgerApi: Send + Sync {
    /// `POST /users`. Succeeds only on 201 with a JSON id in the body.
    async fn create_user(&self) -> Result<UserId, ClientError>;

    /// `GET /users/{id}`. The id is sent as typed.
    async fn user_details(&self, user_id: &str) -> Result<UserDetailsOutcome, ClientError>;

    /// `POST /transactions` with the request as a JSON body.
    async fn transfer(&self, request: &TransferRequest) -> Result<TransferOutcome, ClientError>;
}

/// `LedgerApi` over HTTP, backed by a single `reqwest::Client`.
#[derive(Clone, Debug)]
pub struct HttpLedgerClient {
    /// Root address of the backend, without a trailing slash
    base_url: String,
    /// The underlying HTTP client
    client: reqwest::Client,
}

impl HttpLedgerClient {
    /// Creates a client for the API rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds `{base}/{segments...}`, percent-encoding each segment.
    ///
    /// `.` and `..` have no encoding that survives URL normalization, so they
    /// are refused instead of silently addressing another route.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        if let Some(segment) = segments.iter().find(|segment| is_dot_segment(segment)) {
            return Err(ClientError::InvalidUrl(format!(
                "path segment {:?} would change the route",
                segment
            )));
        }

        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }
}

/// True for segments URL normalization collapses. Any `%` in a segment is
/// itself escaped, so only the literal forms need checking.
fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

#[async_trait]
impl LedgerApi for HttpLedgerClient {
    async fn create_user(&self) -> Result<UserId, ClientError> {
        let url = self.endpoint(&["users"])?;
        debug!("POST {}", url);

        let response = self.client.post(url).send().await?;
        let status = response.status();
        debug!("Create user responded with {}", status);

        if status != StatusCode::CREATED {
            return Err(ClientError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn user_details(&self, user_id: &str) -> Result<UserDetailsOutcome, ClientError> {
        // No URL addresses a user called "." or "..": answer as the backend does for bad ids.
        if is_dot_segment(user_id) {
            debug!("Refusing to request user details for {:?}", user_id);
            return Ok(UserDetailsOutcome::InvalidId(StatusCode::BAD_REQUEST.as_u16()));
        }

        let url = self.endpoint(&["users", user_id])?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        debug!("User details responded with {}", status);

        match status {
            StatusCode::OK => {
                let body = response.text().await?;
                let user: User = serde_json::from_str(&body)?;
                Ok(UserDetailsOutcome::Found(user))
            }
            StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND => {
                Ok(UserDetailsOutcome::InvalidId(status.as_u16()))
            }
            other => Err(ClientError::UnexpectedStatus(other.as_u16())),
        }
    }

    async fn transfer(&self, request: &TransferRequest) -> Result<TransferOutcome, ClientError> {
        let url = self.endpoint(&["transactions"])?;
        debug!("POST {} with {}", url, request);

        let response = self.client.post(url).json(request).send().await?;
        let status = response.status();
        debug!("Transfer responded with {}", status);

        match status {
            StatusCode::OK => {
                let body = response.text().await?;
                let result: TransferResult = serde_json::from_str(&body)?;
                Ok(TransferOutcome::Transferred(result))
            }
            StatusCode::BAD_REQUEST => {
                let reason = response.text().await?;
                Ok(TransferOutcome::Rejected { reason })
            }
            other => Err(ClientError::UnexpectedStatus(other.as_u16())),
        }
    }
}
