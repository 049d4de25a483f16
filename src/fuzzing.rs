use std::path::Path;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::args::parsers::parse_duration_arg;
use crate::config::{ConfigFile, load_config_file};
use crate::error::AppResult;
use crate::schema::{Payload, Schema, generate_payload};

/// Parses a duration argument (e.g. `10s`, `500ms`).
///
/// # Errors
///
/// Returns an error when the duration is invalid.
pub fn parse_duration_arg_input(input: &str) -> AppResult<Duration> {
    parse_duration_arg(input)
}

/// Loads a config file through the extension-based loader.
///
/// # Errors
///
/// Returns an error when the file cannot be read or parsed.
pub fn load_config_file_input(path: &Path) -> AppResult<ConfigFile> {
    load_config_file(path)
}

/// Parses a JSON schema map and synthesizes one payload from it.
///
/// # Errors
///
/// Returns an error when the input is not a JSON object of string tags.
pub fn schema_payload_input(input: &str, seed: u64) -> AppResult<(Schema, Payload)> {
    let schema: Schema = serde_json::from_str(input)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let payload = generate_payload(&schema, &mut rng);
    Ok((schema, payload))
}
