//! policyfeed core: transport-agnostic policy data model, CSV loading, and errors.
//!
//! This crate defines the CSV row shape, the JSON DTO shape, and the error
//! surface shared by the gateway and tests. It carries no HTTP or async
//! runtime dependencies so the loader can be reused from tools and tests.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Every fallible path surfaces as `PolicyFeedError`/`Result` so a bad data
//! file fails one request instead of the process.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod policy;
pub mod source;

pub use error::{PolicyFeedError, Result};
pub use policy::{Facility, PolicyDto, PolicyRecord};
pub use source::{LoadOrigin, Loaded, PolicySource};
