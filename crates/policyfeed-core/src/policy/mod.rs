//! Policy data model and CSV loader.
//!
//! - `record`: raw CSV row (`policy_*` columns) and its renaming into the DTO.
//! - `loader`: header check + row-by-row parse, preserving file order.

pub mod loader;
pub mod record;

pub use loader::{load_policies, parse_policies, REQUIRED_COLUMNS};
pub use record::{Facility, PolicyDto, PolicyRecord};
