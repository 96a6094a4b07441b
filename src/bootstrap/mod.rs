pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;
