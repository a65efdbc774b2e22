//! CSV -> `Vec<PolicyDto>` (panic-free).
//!
//! Parsing rules:
//! - Header row is checked for every required column before any row is read,
//!   so a missing column is a `Schema` error rather than a per-row parse error.
//! - Rows with a different field count than the header are rejected.
//! - Output order is file order.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use super::record::{PolicyDto, PolicyRecord};
use crate::error::{PolicyFeedError, Result};

/// Columns every policy file must carry.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "policy_id",
    "policy_title",
    "policy_instrument",
    "policy_description",
    "policy_name",
];

/// Open `path` read-only and parse it.
///
/// Each call opens its own descriptor; nothing is shared between callers.
pub fn load_policies(path: &Path) -> Result<Vec<PolicyDto>> {
    let file = File::open(path).map_err(|e| PolicyFeedError::from_io(path, e))?;
    parse_from(file, path)
}

/// Parse policy CSV from any reader.
pub fn parse_policies<R: Read>(rdr: R) -> Result<Vec<PolicyDto>> {
    parse_from(rdr, Path::new("<reader>"))
}

/// `origin` only labels I/O errors raised while reading.
fn parse_from<R: Read>(rdr: R, origin: &Path) -> Result<Vec<PolicyDto>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::Headers)
        .from_reader(rdr);

    let headers = reader
        .headers()
        .map_err(|e| PolicyFeedError::from_csv(origin, e))?
        .clone();
    check_headers(&headers)?;

    let mut out = Vec::new();
    for (idx, row) in reader.deserialize::<PolicyRecord>().enumerate() {
        let record = row.map_err(|e| {
            if e.is_io_error() {
                PolicyFeedError::from_csv(origin, e)
            } else {
                // Data rows are 1-based and follow the header line.
                PolicyFeedError::Parse(format!("row {}: {e}", idx + 1))
            }
        })?;
        out.push(PolicyDto::from(record));
    }

    tracing::debug!(rows = out.len(), "policy csv parsed");
    Ok(out)
}

fn check_headers(headers: &StringRecord) -> Result<()> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(PolicyFeedError::Schema { missing })
    }
}
