//! Observability setup for Confidant: structured logging with optional
//! OpenTelemetry span export.

pub mod tracing_setup;
