//! Payload delivery over HTTP.
mod client;
mod dispatch;


pub use client::build_client;
pub use dispatch::{DeliveryOutcome, Dispatcher};
