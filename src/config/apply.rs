use std::time::Duration;

use url::Url;

use crate::args::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, EmitterArgs, PositiveU64};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::{ConfigFile, DurationValue, RunConfig};

/// Merges CLI overrides over the config file and validates the result.
///
/// CLI values win over file values. Any failure here is fatal at startup.
///
/// # Errors
///
/// Returns an error when the url is missing or invalid, the interval is
/// missing or zero, or a timeout cannot be parsed.
pub fn resolve_config(args: &EmitterArgs, config: ConfigFile) -> AppResult<RunConfig> {
    let ConfigFile {
        url: file_url,
        interval_sec,
        data_format,
        timeout,
        connect_timeout,
    } = config;

    let raw_url = args
        .url
        .clone()
        .or(file_url)
        .ok_or_else(|| AppError::config(ConfigError::MissingUrl))?;
    let url = parse_target_url(&raw_url)?;

    let interval = match args.interval {
        Some(interval) => interval,
        None => {
            let secs = interval_sec.ok_or_else(|| AppError::config(ConfigError::MissingInterval))?;
            PositiveU64::try_from(secs).map_err(|err| {
                AppError::config(ConfigError::FieldMustBePositive {
                    field: "interval_sec".to_owned(),
                    source: err,
                })
            })?
        }
    };

    let request_timeout = resolve_timeout(
        args.request_timeout,
        timeout.as_ref(),
        "timeout",
        DEFAULT_REQUEST_TIMEOUT,
    )?;
    let connect_timeout = resolve_timeout(
        args.connect_timeout,
        connect_timeout.as_ref(),
        "connect_timeout",
        DEFAULT_CONNECT_TIMEOUT,
    )?;

    Ok(RunConfig {
        url,
        interval: Duration::from_secs(interval.get()),
        schema: data_format,
        request_timeout,
        connect_timeout,
        max_ticks: args.max_ticks.map(PositiveU64::get),
        seed: args.seed,
    })
}

fn parse_target_url(raw: &str) -> AppResult<Url> {
    let url = Url::parse(raw.trim()).map_err(|err| {
        AppError::config(ConfigError::InvalidUrl {
            url: raw.to_owned(),
            source: err,
        })
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AppError::config(ConfigError::UnsupportedScheme {
            scheme: other.to_owned(),
        })),
    }
}

fn resolve_timeout(
    cli: Option<Duration>,
    file: Option<&DurationValue>,
    field: &'static str,
    default: Duration,
) -> AppResult<Duration> {
    if let Some(duration) = cli {
        return Ok(duration);
    }
    file.map_or(Ok(default), |value| {
        value
            .to_duration()
            .map_err(|err| AppError::config(ConfigError::InvalidDuration { field, source: err }))
    })
}
