//! Observability subsystem.
//!
//! Every subsystem emits `tracing` events with structured fields; `logging`
//! installs the subscriber that renders them (pretty or JSON, on stderr).

pub mod logging;
