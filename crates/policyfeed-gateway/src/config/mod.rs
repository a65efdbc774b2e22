//! Gateway config loader (strict parsing).
//!
//! The config file is optional: when it does not exist the built-in defaults
//! apply (fixed local port, CSV next to this crate).

pub mod schema;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use policyfeed_core::error::{PolicyFeedError, Result};

pub use schema::{DataSection, GatewayConfig, ServerSection};

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| PolicyFeedError::Config(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

/// Load `path` if it exists, otherwise fall back to [`GatewayConfig::default`].
pub fn load_or_default(path: &str) -> Result<GatewayConfig> {
    match fs::metadata(Path::new(path)) {
        Ok(_) => load_from_file(path),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path, "no config file, using defaults");
            Ok(GatewayConfig::default())
        }
        Err(e) => Err(PolicyFeedError::Config(format!("stat config failed ({path}): {e}"))),
    }
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| PolicyFeedError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
