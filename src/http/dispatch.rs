use futures_util::StreamExt;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use tracing::debug;
use url::Url;

use crate::config::RunConfig;
use crate::error::{AppResult, DeliveryError};
use crate::schema::Payload;

use super::client::build_client;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Result of one delivery attempt.
#[derive(Debug)]
pub enum DeliveryOutcome {
    /// The receiver answered with a status below 300.
    Delivered { status: StatusCode },
    Failed(DeliveryError),
}

impl DeliveryOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }

    /// # Errors
    ///
    /// Returns the failure cause for [`DeliveryOutcome::Failed`].
    pub fn into_result(self) -> Result<StatusCode, DeliveryError> {
        match self {
            Self::Delivered { status } => Ok(status),
            Self::Failed(err) => Err(err),
        }
    }
}

/// Posts payloads as JSON, one attempt per call.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    client: Client,
}

impl Dispatcher {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn from_config(config: &RunConfig) -> AppResult<Self> {
        let client = build_client(config.request_timeout, config.connect_timeout)?;
        Ok(Self::new(client))
    }

    /// Sends `payload` to `url` and classifies the response.
    ///
    /// Never retries and never panics; every failure comes back as
    /// [`DeliveryOutcome::Failed`].
    pub async fn send(&self, url: &Url, payload: &Payload) -> DeliveryOutcome {
        let body = match payload.to_json_vec() {
            Ok(body) => body,
            Err(err) => return DeliveryOutcome::Failed(DeliveryError::Encode { source: err }),
        };

        let request = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
            .body(body);

        match request.send().await {
            Ok(response) => classify_response(response).await,
            Err(err) => DeliveryOutcome::Failed(DeliveryError::Transport { source: err }),
        }
    }
}

// Consumes the response on every branch so the connection is released.
async fn classify_response(response: Response) -> DeliveryOutcome {
    let status = response.status();
    if status.as_u16() < 300 {
        match drain_response_body(response).await {
            Ok(bytes) => debug!("Receiver answered {} with {} body bytes", status, bytes),
            Err(err) => debug!("Failed to drain response body after {}: {}", status, err),
        }
        return DeliveryOutcome::Delivered { status };
    }

    match read_body_text(response).await {
        Ok(body) => DeliveryOutcome::Failed(DeliveryError::Status { status, body }),
        Err(err) => {
            debug!("Failed to read error body for {}: {}", status, err);
            DeliveryOutcome::Failed(DeliveryError::StatusOnly { status })
        }
    }
}

async fn drain_response_body(response: Response) -> Result<u64, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}

async fn read_body_text(response: Response) -> Result<String, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut collected: Vec<u8> = Vec::new();
    while let Some(chunk) = stream.next().await {
        collected.extend_from_slice(&chunk?);
    }
    Ok(String::from_utf8_lossy(&collected).into_owned())
}
