use std::error::Error as StdError;

use reqwest::StatusCode;
use thiserror::Error;

/// Why a single delivery attempt did not succeed.
///
/// Every variant is scoped to one tick; none of them stop the emitter.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("failed to encode payload: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
    #[error("transport error: {}", render_cause_chain(.source))]
    Transport {
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP error {}: {body}", .status.as_u16())]
    Status { status: StatusCode, body: String },
    #[error("HTTP error {}", .status.as_u16())]
    StatusOnly { status: StatusCode },
}

impl DeliveryError {
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } | Self::StatusOnly { status } => Some(*status),
            Self::Encode { .. } | Self::Transport { .. } => None,
        }
    }

    #[must_use]
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport { source } => source.is_timeout(),
            Self::Encode { .. } | Self::Status { .. } | Self::StatusOnly { .. } => false,
        }
    }
}

// reqwest keeps the useful part (refused, DNS, timeout) in the source chain.
fn render_cause_chain(err: &reqwest::Error) -> String {
    let mut rendered = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        let text = inner.to_string();
        if !rendered.ends_with(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        cause = inner.source();
    }
    rendered
}
