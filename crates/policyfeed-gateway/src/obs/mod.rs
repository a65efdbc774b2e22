//! Lightweight in-process metrics.
//!
//! Request outcomes, load timings, and cache hits are stored as atomics and
//! rendered by the `/metrics` handler in Prometheus text format.

pub mod metrics;

pub use metrics::GatewayMetrics;
