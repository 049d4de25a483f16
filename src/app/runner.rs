use tracing::{debug, warn};

use crate::config::RunConfig;
use crate::error::AppResult;
use crate::http::Dispatcher;
use crate::shutdown::shutdown_channel;
use crate::shutdown_handlers::setup_signal_shutdown_handler;

use super::scheduler::{RunSummary, Scheduler};

/// Builds the dispatcher, installs signal handling and runs the scheduler.
///
/// # Errors
///
/// Returns an error when the HTTP client cannot be built. Per-tick delivery
/// failures are logged and never surface here.
pub async fn run_emitter(config: RunConfig) -> AppResult<RunSummary> {
    for (name, tag) in config.schema.unknown_fields() {
        warn!(
            "Field '{}' has unknown type '{}'; it will be sent as null.",
            name, tag
        );
    }
    debug!(
        url = %config.url,
        interval_secs = config.interval.as_secs(),
        fields = config.schema.len(),
        timeout = ?config.request_timeout,
        "Resolved configuration"
    );

    let dispatcher = Dispatcher::from_config(&config)?;
    let (shutdown_tx, shutdown_rx) = shutdown_channel();
    let signal_handle = setup_signal_shutdown_handler(&shutdown_tx);

    let summary = Scheduler::new(config, dispatcher).run(shutdown_rx).await;

    drop(shutdown_tx.send(()));
    if let Err(err) = signal_handle.await {
        debug!("Signal handler join error: {}", err);
    }
    Ok(summary)
}
