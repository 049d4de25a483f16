use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::args::parsers::parse_duration;
use crate::error::ValidationError;
use crate::schema::Schema;

/// Raw config file contents, before CLI overrides and validation.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub url: Option<String>,
    #[serde(alias = "interval")]
    pub interval_sec: Option<u64>,
    #[serde(default, alias = "schema")]
    pub data_format: Schema,
    pub timeout: Option<DurationValue>,
    pub connect_timeout: Option<DurationValue>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(0) => Err(ValidationError::DurationZero),
            DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
            DurationValue::Text(text) => parse_duration(text),
        }
    }
}

/// Validated settings the emitter runs with.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub url: Url,
    /// Whole seconds, always > 0.
    pub interval: Duration,
    pub schema: Schema,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub max_ticks: Option<u64>,
    pub seed: Option<u64>,
}
