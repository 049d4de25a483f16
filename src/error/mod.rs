mod app;
mod config;
mod delivery;
mod http;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use delivery::DeliveryError;
pub use http::HttpError;
pub use validation::ValidationError;
