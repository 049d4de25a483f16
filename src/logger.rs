use tracing_subscriber::{EnvFilter, FmtSubscriber};

const LOG_ENV_VARS: [&str; 2] = ["SYNTHPOST_LOG", "RUST_LOG"];

/// Installs the global subscriber. One line per tick, so targets are left out.
pub fn init_logging(verbose: bool) {
    let configured = LOG_ENV_VARS
        .iter()
        .find_map(|name| std::env::var(name).ok());
    let filter = resolve_filter(configured.as_deref(), verbose);

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

// An env directive wins over --verbose; a malformed one falls back to info.
fn resolve_filter(configured: Option<&str>, verbose: bool) -> EnvFilter {
    match configured {
        Some(directives) => {
            EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info"))
        }
        None if verbose => EnvFilter::new("debug"),
        None => EnvFilter::new("info"),
    }
}
