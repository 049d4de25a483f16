use clap::Parser;
use std::time::Duration;

use super::parsers::{parse_duration_arg, parse_positive_u64};
use super::types::PositiveU64;

#[derive(Debug, Parser, Clone, Default)]
#[clap(
    version,
    about = "Configuration-driven synthetic JSON emitter - posts schema-shaped random payloads to a REST endpoint on a fixed interval."
)]
pub struct EmitterArgs {
    /// Config file describing url, interval_sec and data_format (.yaml, .yml, .toml or .json)
    #[arg(value_name = "CONFIG")]
    pub config: Option<String>,

    /// Target URL (overrides the config file)
    #[arg(long, short, env = "SYNTHPOST_URL")]
    pub url: Option<String>,

    /// Emission interval in whole seconds (overrides the config file)
    #[arg(long, short = 'i', env = "SYNTHPOST_INTERVAL", value_parser = parse_positive_u64)]
    pub interval: Option<PositiveU64>,

    /// Per-request timeout (e.g. 500ms, 10s, 1m)
    #[arg(long = "timeout", value_parser = parse_duration_arg)]
    pub request_timeout: Option<Duration>,

    /// Connection establishment timeout (e.g. 500ms, 5s)
    #[arg(long = "connect-timeout", value_parser = parse_duration_arg)]
    pub connect_timeout: Option<Duration>,

    /// Stop after this many ticks instead of running until terminated
    #[arg(long = "max-ticks", value_parser = parse_positive_u64)]
    pub max_ticks: Option<PositiveU64>,

    /// Seed for the payload random source (reproducible payload sequences)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}
