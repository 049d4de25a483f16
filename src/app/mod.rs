//! The emission loop and its wiring.
mod runner;
mod scheduler;


pub use runner::run_emitter;
pub use scheduler::{RunSummary, Scheduler};
