//! Startup configuration read from environment variables.

use std::path::PathBuf;

use hospital_fragility_dataset::DEFAULT_DATA_PATH;
use hospital_fragility_metrics::{default_region, find_region};
use hospital_fragility_metrics_models::Region;

/// Interface to bind to.
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";
/// Port to listen on.
pub const PORT_VAR: &str = "PORT";
/// Path to the hospitals `GeoJSON` file.
pub const DATA_PATH_VAR: &str = "HOSPITALS_DATA_PATH";
/// Region code stamped onto every record.
pub const REGION_VAR: &str = "HOSPITALS_REGION";
/// Directory holding the built frontend.
pub const STATIC_DIR_VAR: &str = "STATIC_DIR";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STATIC_DIR: &str = "app/dist";

/// Server settings, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind to, from `BIND_ADDR`; defaults to loopback.
    pub bind_addr: String,
    /// Port to listen on, from `PORT`; defaults to 8080.
    pub port: u16,
    /// Location of the hospitals dataset, from `HOSPITALS_DATA_PATH`.
    pub data_path: PathBuf,
    /// Region every record is projected for, from `HOSPITALS_REGION`.
    pub region: Region,
    /// Directory of frontend assets served at `/`, from `STATIC_DIR`.
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup. Missing
    /// or unparseable values fall back to their defaults.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let port = var(PORT_VAR).map_or(DEFAULT_PORT, |p| {
            p.trim().parse().unwrap_or_else(|_| {
                log::warn!("Ignoring invalid {PORT_VAR} '{p}', using {DEFAULT_PORT}");
                DEFAULT_PORT
            })
        });

        let region = var(REGION_VAR).map_or_else(default_region, |code| {
            find_region(&code).unwrap_or_else(|| {
                log::warn!("Unknown region '{code}', falling back to the default region");
                default_region()
            })
        });

        Self {
            bind_addr: var(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            port,
            data_path: PathBuf::from(
                var(DATA_PATH_VAR).unwrap_or_else(|| DEFAULT_DATA_PATH.to_string()),
            ),
            region,
            static_dir: PathBuf::from(
                var(STATIC_DIR_VAR).unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            ),
        }
    }
}
