//! Core library for the `synthpost` CLI.
//!
//! This crate provides the building blocks used by the binary: CLI argument
//! types, configuration loading, schema-driven payload synthesis, HTTP
//! delivery, and the fixed-interval emission loop. The primary user-facing
//! interface is the `synthpost` command-line application.
pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod schema;
pub mod shutdown;
mod shutdown_handlers;
#[cfg(test)]
mod test_support;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;
