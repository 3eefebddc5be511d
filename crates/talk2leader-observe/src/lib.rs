//! Observability setup for Talk2Leader: structured logging and optional
//! OpenTelemetry span export.

pub mod tracing_setup;
