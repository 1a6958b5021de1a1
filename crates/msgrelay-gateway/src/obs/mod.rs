//! Observability: tracing setup with console and file outputs.

pub mod logging;
