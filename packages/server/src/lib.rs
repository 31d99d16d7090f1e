#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the fare radar application.
//!
//! Serves the JSON API the dashboard frontend consumes: scrape initiation
//! (supervising the scraper binary as an external process), dataset
//! analysis, and the AI narrative. Static frontend files are served from
//! `app/dist`.
//!
//! Nothing here is fatal to the server process: every handler converts
//! failures into structured JSON responses.

mod handlers;
pub mod json;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use fare_radar_dataset::{DatasetStore, default_data_dir};

/// Wall-clock upper bound on one scrape process.
pub const SCRAPE_TIMEOUT: Duration = Duration::from_secs(600);

/// Shared application state.
pub struct AppState {
    /// Handle to the current dataset, written by a successful scrape and
    /// read by every analysis request.
    pub datasets: Arc<DatasetStore>,
    /// Single-writer guard: held for the duration of a scrape so
    /// overlapping scrape requests do not interleave writes to the same
    /// path.
    pub scrape_lock: tokio::sync::Mutex<()>,
}

/// Resolves the scraper binary the scrape endpoint spawns.
///
/// `FARE_RADAR_SCRAPER_BIN` overrides; otherwise the binary is expected
/// next to the server executable (both are workspace targets).
#[must_use]
pub fn scraper_binary() -> PathBuf {
    if let Ok(path) = std::env::var("FARE_RADAR_SCRAPER_BIN") {
        return PathBuf::from(path);
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| Some(exe.parent()?.join("fare_radar_scraper")))
        .unwrap_or_else(|| PathBuf::from("fare_radar_scraper"))
}

/// Starts the fare radar API server.
///
/// Binds to `BIND_ADDR`/`PORT` (default `127.0.0.1:8000`) and serves until
/// shut down. This is a regular async function; the caller provides the
/// async runtime (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let data_dir = default_data_dir();
    log::info!("Dataset directory: {}", data_dir.display());

    let state = web::Data::new(AppState {
        datasets: Arc::new(DatasetStore::new(data_dir)),
        scrape_lock: tokio::sync::Mutex::new(()),
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/dashboard", web::get().to(handlers::dashboard))
                    .route("/scrape", web::post().to(handlers::scrape))
                    .route("/analyze", web::get().to(handlers::analyze))
                    .route("/ai-insight", web::get().to(handlers::ai_insight)),
            )
            // Serve frontend static files (production)
            .service(Files::new("/", "app/dist").index_file("index.html"))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
