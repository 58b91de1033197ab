//! Observability for the resolver: counters and operation timing.

pub mod metrics;

pub use metrics::{MetricsTracker, Timer};
