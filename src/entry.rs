use std::ffi::OsString;
use std::path::Path;

use clap::{CommandFactory, FromArgMatches};
use tracing::{error, info};

use crate::app;
use crate::args::{DEFAULT_CONFIG_FILES, EmitterArgs};
use crate::config::{self, RunConfig};
use crate::error::AppResult;

pub(crate) fn run() -> AppResult<()> {
    let Some(args) = parse_args()? else {
        return Ok(());
    };

    crate::logger::init_logging(args.verbose);

    let config = load_run_config(&args)
        .inspect_err(|err| error!("Failed to load config: {}", err))?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let summary = runtime.block_on(app::run_emitter(config))?;
    info!(
        "Sent {} of {} payloads ({} failed).",
        summary.delivered, summary.ticks, summary.failed
    );
    Ok(())
}

fn parse_args() -> AppResult<Option<EmitterArgs>> {
    let mut cmd = EmitterArgs::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    if should_show_help(&raw_args) {
        cmd.print_help()?;
        println!();
        return Ok(None);
    }

    let matches = cmd.get_matches_from(raw_args);
    let args = EmitterArgs::from_arg_matches(&matches)?;

    Ok(Some(args))
}

fn should_show_help(raw_args: &[OsString]) -> bool {
    let treat_as_empty =
        matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--");
    if !treat_as_empty {
        return false;
    }

    !has_default_config()
}

fn has_default_config() -> bool {
    DEFAULT_CONFIG_FILES
        .iter()
        .any(|path| Path::new(path).exists())
}

fn load_run_config(args: &EmitterArgs) -> AppResult<RunConfig> {
    let file = config::load_config(args.config.as_deref())?;
    config::resolve_config(args, file)
}
