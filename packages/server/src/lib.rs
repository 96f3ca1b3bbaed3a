#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the hospital fragility dashboard.
//!
//! Loads the hospitals dataset once at startup, projects it into an
//! immutable [`HospitalIndex`] and serves read-only JSON endpoints plus the
//! built frontend. Nothing is mutated after startup, so requests are
//! handled in parallel without coordination.

pub mod config;
mod handlers;
pub mod interactive;

use std::path::Path;
use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use hospital_fragility_dataset::{DatasetError, load_from_path};
use hospital_fragility_metrics_models::Region;
use hospital_fragility_query::HospitalIndex;

pub use config::ServerConfig;

/// Shared application state.
pub struct AppState {
    /// Projected hospitals, built once at startup.
    pub index: Arc<HospitalIndex>,
}

/// Loads the dataset at `data_path` and builds the index for `region`.
///
/// # Errors
///
/// Returns a [`DatasetError`] if the dataset cannot be read or parsed.
pub fn load_index(data_path: &Path, region: Region) -> Result<HospitalIndex, DatasetError> {
    let raw = load_from_path(data_path)?;
    Ok(HospitalIndex::build(raw, region))
}

/// Registers the `/api` routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/hospitals", web::get().to(handlers::hospitals))
            .route("/hospital-detail", web::get().to(handlers::hospital_detail))
            .route("/legend", web::get().to(handlers::legend)),
    );
}

/// Starts the hospital fragility API server.
///
/// Reads [`ServerConfig`] from the environment, loads and projects the
/// dataset, and starts the Actix-Web HTTP server. The caller is
/// responsible for providing the async runtime (e.g. via
/// `#[actix_web::main]`) and for initializing logging.
///
/// # Errors
///
/// Returns an `std::io::Result` error if the dataset cannot be loaded, or
/// if the HTTP server fails to bind or encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    let config = ServerConfig::from_env();

    let index = load_index(&config.data_path, config.region.clone()).map_err(|e| {
        log::error!("Failed to load {}: {e}", config.data_path.display());
        std::io::Error::other(e)
    })?;

    let state = web::Data::new(AppState {
        index: Arc::new(index),
    });

    let static_dir = config.static_dir.clone();

    log::info!("Starting server on {}:{}", config.bind_addr, config.port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
            // Serve frontend static files (production)
            .service(Files::new("/", static_dir.clone()).index_file("index.html"))
    })
    .bind((config.bind_addr.as_str(), config.port))?
    .run()
    .await
}
