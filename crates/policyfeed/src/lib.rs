//! Top-level facade crate for policyfeed.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use policyfeed_core::*;
}

pub mod gateway {
    pub use policyfeed_gateway::*;
}
