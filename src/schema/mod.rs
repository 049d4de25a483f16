//! Schema model and payload synthesis.
//!
//! A [`Schema`] maps field names to a [`FieldType`]; a [`Synthesizer`] turns
//! it into a fresh random [`Payload`] on every call.
mod generate;
mod types;


pub use generate::{Synthesizer, generate_payload, generate_value};
pub use types::{FieldType, Payload, Schema};
