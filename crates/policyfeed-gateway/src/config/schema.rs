use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;
use policyfeed_core::error::{PolicyFeedError, Result};

/// Directory the default data path and relative `data.csv_path` values resolve against.
pub const SERVICE_DIR: &str = env!("CARGO_MANIFEST_DIR");

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub data: DataSection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            data: DataSection::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(PolicyFeedError::Config(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.server.validate()?;
        self.data.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            PolicyFeedError::Config(format!(
                "server.listen must be a valid SocketAddr ({}): {e}",
                self.listen
            ))
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataSection {
    #[serde(default = "default_csv_path")]
    pub csv_path: String,

    /// Reuse parsed rows while the file mtime is unchanged.
    #[serde(default)]
    pub cache: bool,
}

impl Default for DataSection {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
            cache: false,
        }
    }
}

impl DataSection {
    pub fn validate(&self) -> Result<()> {
        if self.csv_path.trim().is_empty() {
            return Err(PolicyFeedError::Config("data.csv_path must not be empty".into()));
        }
        Ok(())
    }

    /// Absolute CSV path; relative values are taken from the service directory.
    pub fn resolved_csv_path(&self) -> PathBuf {
        let p = PathBuf::from(&self.csv_path);
        if p.is_absolute() {
            p
        } else {
            PathBuf::from(SERVICE_DIR).join(p)
        }
    }
}

fn default_listen() -> String {
    "127.0.0.1:3000".into()
}
fn default_csv_path() -> String {
    "data/policies.csv".into()
}
