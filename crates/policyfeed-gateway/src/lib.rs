//! policyfeed gateway library entry.
//!
//! This crate wires config, the policy data source, the HTTP API, and the
//! operational endpoints into one axum service. It is consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
