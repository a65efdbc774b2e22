//! Policy HTTP API.
//!
//! - `GET /api/policies`      : every policy, CSV order
//! - `GET /api/policies/:id`  : one policy by id (404 when absent)

pub mod error;
pub mod policies;

pub use error::ApiError;
