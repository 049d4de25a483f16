mod app;
mod args;
mod config;
mod entry;
mod error;
mod http;
mod logger;
mod schema;
mod shutdown;
mod shutdown_handlers;
#[cfg(test)]
mod test_support;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
