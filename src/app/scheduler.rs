use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, error, info};
use url::Url;

use crate::config::RunConfig;
use crate::http::{DeliveryOutcome, Dispatcher};
use crate::schema::{Payload, Schema, Synthesizer};
use crate::shutdown::ShutdownReceiver;

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Tick counters for one run of the emitter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub delivered: u64,
    pub failed: u64,
}

impl RunSummary {
    fn record(&mut self, outcome: &DeliveryOutcome) {
        self.ticks = self.ticks.saturating_add(1);
        if outcome.is_success() {
            self.delivered = self.delivered.saturating_add(1);
        } else {
            self.failed = self.failed.saturating_add(1);
        }
    }
}

/// Drives generate-then-send once per interval.
///
/// Ticks never overlap: the next tick is only awaited after the current send
/// has finished, and ticks missed while a send was slow are skipped.
pub struct Scheduler {
    url: Url,
    schema: Schema,
    interval: Duration,
    max_ticks: Option<u64>,
    synthesizer: Synthesizer,
    dispatcher: Dispatcher,
}

impl Scheduler {
    #[must_use]
    pub fn new(config: RunConfig, dispatcher: Dispatcher) -> Self {
        Self {
            url: config.url,
            schema: config.schema,
            interval: config.interval,
            max_ticks: config.max_ticks,
            synthesizer: Synthesizer::new(config.seed),
            dispatcher,
        }
    }

    /// Generates one payload and delivers it.
    pub async fn run_tick(&mut self) -> (Payload, DeliveryOutcome) {
        let payload = self.synthesizer.generate(&self.schema);
        let outcome = self.dispatcher.send(&self.url, &payload).await;
        (payload, outcome)
    }

    /// Runs until shutdown is published or `max_ticks` is reached.
    ///
    /// `shutdown_rx` must be subscribed before any signal handler is spawned,
    /// so a shutdown published ahead of the first tick is still observed.
    pub async fn run(mut self, mut shutdown_rx: ShutdownReceiver) -> RunSummary {
        // tokio rejects a zero period.
        let period = self.interval.max(MIN_PERIOD);
        let first_tick = Instant::now()
            .checked_add(period)
            .unwrap_or_else(Instant::now);
        let mut ticker = interval_at(first_tick, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut summary = RunSummary::default();

        info!("Starting REST client...");
        loop {
            if self.max_ticks.is_some_and(|max| summary.ticks >= max) {
                debug!("Reached {} ticks, stopping.", summary.ticks);
                break;
            }

            tokio::select! {
                _ = shutdown_rx.recv() => break,
                _ = ticker.tick() => {}
            }

            let (payload, outcome) = tokio::select! {
                _ = shutdown_rx.recv() => {
                    debug!("Shutdown during in-flight send; dropping tick.");
                    break;
                }
                result = self.run_tick() => result,
            };
            summary.record(&outcome);
            report_outcome(&payload, outcome);
        }

        info!(
            ticks = summary.ticks,
            delivered = summary.delivered,
            failed = summary.failed,
            "Emitter stopped."
        );
        summary
    }
}

fn report_outcome(payload: &Payload, outcome: DeliveryOutcome) {
    match outcome {
        DeliveryOutcome::Delivered { status } => {
            debug!("Receiver answered {}", status);
            info!("Sent data: {}", payload);
        }
        DeliveryOutcome::Failed(err) => error!("Failed to send data: {}", err),
    }
}
