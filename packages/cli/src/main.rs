#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line interface for the hospital fragility metrics.
//!
//! ```text
//! hospital_fragility list [--iso3 USA] [--risk-level high] [--sort-by fragilityScore] [--asc]
//! hospital_fragility summary
//! hospital_fragility detail wa-007
//! hospital_fragility serve
//! ```
//!
//! `--json` prints the same JSON the API serves. Running with no
//! subcommand enters interactive mode.

mod format;
mod interactive;

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use hospital_fragility_dataset::DEFAULT_DATA_PATH;
use hospital_fragility_metrics::find_region;
use hospital_fragility_metrics::registry::DEFAULT_REGION_CODE;
use hospital_fragility_query::{HospitalIndex, ListOptions, QueryError};
use hospital_fragility_server::config::{DATA_PATH_VAR, REGION_VAR};

#[derive(Parser)]
#[command(
    name = "hospital_fragility",
    about = "Query hospital fragility metrics for Washington State"
)]
struct Cli {
    /// Path to the hospitals GeoJSON dataset
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Dataset region code
    #[arg(long, global = true)]
    region: Option<String>,

    /// Print JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List hospitals, optionally filtered and sorted
    List {
        /// Only hospitals in this ISO3 country (takes precedence over --risk-level)
        #[arg(long)]
        iso3: Option<String>,
        /// Only hospitals in this risk tier (low, medium, high, critical)
        #[arg(long)]
        risk_level: Option<String>,
        /// Sort column (name, fragilityScore, totalBeds, occupancyRate, riskLevel)
        #[arg(long)]
        sort_by: Option<String>,
        /// Sort ascending instead of descending
        #[arg(long)]
        asc: bool,
    },
    /// Show aggregate statistics
    Summary,
    /// Show the detail view for one hospital
    Detail {
        /// Hospital ID, e.g. wa-007
        id: String,
    },
    /// Start the API server
    Serve,
}

/// Dataset location and region, after applying defaults.
struct Source {
    data: PathBuf,
    region: String,
}

impl Source {
    fn from_cli(cli: &Cli) -> Self {
        Self {
            data: cli
                .data
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH)),
            region: cli
                .region
                .clone()
                .unwrap_or_else(|| DEFAULT_REGION_CODE.to_string()),
        }
    }

    /// Loads the dataset and builds the index.
    ///
    /// # Errors
    ///
    /// Returns an error if the region is unknown or the dataset cannot be
    /// loaded.
    fn load(&self) -> Result<HospitalIndex, Box<dyn Error>> {
        let region =
            find_region(&self.region).ok_or_else(|| format!("Unknown region '{}'", self.region))?;
        Ok(hospital_fragility_server::load_index(&self.data, region)?)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");
    let cli = Cli::parse();
    let source = Source::from_cli(&cli);

    let Some(command) = cli.command else {
        return interactive::run(&source);
    };

    match command {
        Commands::List {
            iso3,
            risk_level,
            sort_by,
            asc,
        } => {
            let options = list_options(
                iso3.as_deref(),
                risk_level.as_deref(),
                sort_by.as_deref(),
                asc,
            )?;
            let index = source.load()?;
            let records = index.list(&options);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                println!("{}", format::render_table(&records));
            }
        }
        Commands::Summary => {
            let index = source.load()?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(index.summary())?);
            } else {
                println!("{}", format::render_summary(index.summary()));
            }
        }
        Commands::Detail { id } => {
            let detail = source.load()?.get_detail(&id)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&detail)?);
            } else {
                println!("{}", format::render_detail(&detail));
            }
        }
        Commands::Serve => serve(cli.data.as_deref(), cli.region.as_deref())?,
    }

    Ok(())
}

/// Builds listing options from `list` flags, validated the same way as
/// the API's query parameters.
fn list_options(
    iso3: Option<&str>,
    risk_level: Option<&str>,
    sort_by: Option<&str>,
    asc: bool,
) -> Result<ListOptions, QueryError> {
    ListOptions::from_params(iso3, risk_level, sort_by, Some(if asc { "asc" } else { "desc" }))
}

/// Starts the API server, passing explicit `--data`/`--region` flags
/// through to its environment configuration.
fn serve(data: Option<&Path>, region: Option<&str>) -> std::io::Result<()> {
    // SAFETY: We are single-threaded at this point (before the server
    // starts) and these variables are only read once during startup.
    unsafe {
        if let Some(data) = data {
            std::env::set_var(DATA_PATH_VAR, data);
        }
        if let Some(region) = region {
            std::env::set_var(REGION_VAR, region);
        }
    }

    log::info!("Starting server from CLI");
    actix_web::rt::System::new().block_on(hospital_fragility_server::run_server())
}
