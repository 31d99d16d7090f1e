//! HTTP handler functions for the fare radar API.

use actix_web::{HttpResponse, web};
use fare_radar_dataset::{DEFAULT_DATASET_FILENAME, codec};
use fare_radar_flight_models::FlightRecord;
use fare_radar_server_models::{
    AiInsightResponse, ApiDashboard, ApiError, ScrapeOutcome, ScrapeRequest,
};
use tokio::process::Command;

use crate::{AppState, SCRAPE_TIMEOUT, json, scraper_binary};

/// Error body returned (HTTP 200) when no dataset file exists yet.
const NO_DATA: &str = "No flight data available. Please run the scraper first.";

/// `GET /api/dashboard`
///
/// Basic dashboard information and server status.
pub async fn dashboard(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ApiDashboard {
        status: "online".to_string(),
        data_available: state.datasets.data_available(),
        csv_path: state.datasets.current_path().display().to_string(),
        endpoints: vec![
            "/api/analyze".to_string(),
            "/api/scrape".to_string(),
            "/api/ai-insight".to_string(),
            "/api/dashboard".to_string(),
        ],
    })
}

/// `POST /api/scrape`
///
/// Runs the scraper binary as an external process, bounded by
/// [`SCRAPE_TIMEOUT`]. The requested filename is always normalized to the
/// fixed dataset filename. On failure the previous dataset, if any,
/// remains current.
pub async fn scrape(state: web::Data<AppState>, body: web::Json<ScrapeRequest>) -> HttpResponse {
    // Hold the guard for the whole scrape so overlapping requests cannot
    // interleave writes to the same output path.
    let _guard = state.scrape_lock.lock().await;

    if body.filename != DEFAULT_DATASET_FILENAME {
        log::info!(
            "Normalizing requested filename '{}' to '{DEFAULT_DATASET_FILENAME}'",
            body.filename
        );
    }

    let binary = scraper_binary();
    log::info!(
        "Scraping {} to {} ({} through {}) via {}",
        body.origin,
        body.destination,
        body.start_date,
        body.end_date,
        binary.display()
    );

    let mut command = Command::new(&binary);
    command
        .arg(&body.origin)
        .arg(&body.destination)
        .arg(&body.start_date)
        .arg(&body.end_date)
        .arg("--filename")
        .arg(DEFAULT_DATASET_FILENAME)
        .env("FARE_RADAR_DATA_DIR", state.datasets.dir())
        .kill_on_drop(true);

    let output = match tokio::time::timeout(SCRAPE_TIMEOUT, command.output()).await {
        Err(_) => {
            log::error!("Scrape timed out after {}s", SCRAPE_TIMEOUT.as_secs());
            return HttpResponse::InternalServerError().json(ScrapeOutcome {
                status: "Scraping error".to_string(),
                details: format!("scrape timed out after {}s", SCRAPE_TIMEOUT.as_secs()),
            });
        }
        Ok(Err(e)) => {
            log::error!("Failed to spawn scraper {}: {e}", binary.display());
            return HttpResponse::InternalServerError().json(ScrapeOutcome {
                status: "Scraping error".to_string(),
                details: e.to_string(),
            });
        }
        Ok(Ok(output)) => output,
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        log::error!("Scraper exited with {}: {stderr}", output.status);
        return HttpResponse::InternalServerError().json(ScrapeOutcome {
            status: "Scraping failed".to_string(),
            details: stderr,
        });
    }

    state
        .datasets
        .set_current(state.datasets.dir().join(DEFAULT_DATASET_FILENAME));

    HttpResponse::Ok().json(ScrapeOutcome {
        status: "Scraping complete!".to_string(),
        details: String::from_utf8_lossy(&output.stdout).into_owned(),
    })
}

/// `GET /api/analyze`
///
/// The full summary report plus the AI narrative. Recomputed from the
/// current dataset file on every call.
pub async fn analyze(state: web::Data<AppState>) -> HttpResponse {
    if !state.datasets.data_available() {
        return HttpResponse::Ok().json(ApiError {
            error: NO_DATA.to_string(),
        });
    }

    let records = match state.datasets.read() {
        Ok(records) => records,
        Err(e) => {
            log::error!("Failed to read dataset: {e}");
            return HttpResponse::InternalServerError().json(ApiError {
                error: format!("Failed to read dataset: {e}"),
            });
        }
    };

    let report = fare_radar_analytics::summarize(&records);
    let narrative = narrative(&records).await;

    let mut body = match json::to_json_safe(&report) {
        Ok(value) => value,
        Err(e) => {
            log::error!("Failed to serialize report: {e}");
            return HttpResponse::InternalServerError().json(ApiError {
                error: format!("Failed to serialize report: {e}"),
            });
        }
    };
    body["ai_insights"] = serde_json::Value::String(narrative);

    HttpResponse::Ok().json(body)
}

/// `GET /api/ai-insight`
///
/// Just the narrative text.
pub async fn ai_insight(state: web::Data<AppState>) -> HttpResponse {
    if !state.datasets.data_available() {
        return HttpResponse::Ok().json(ApiError {
            error: NO_DATA.to_string(),
        });
    }

    let records = match state.datasets.read() {
        Ok(records) => records,
        Err(e) => {
            log::error!("Failed to read dataset: {e}");
            return HttpResponse::InternalServerError().json(ApiError {
                error: format!("Failed to read dataset: {e}"),
            });
        }
    };

    HttpResponse::Ok().json(AiInsightResponse {
        ai_insights: narrative(&records).await,
    })
}

/// Hands a capped sample of the dataset, serialized back to CSV text, to
/// the narrative summarizer. A sample that fails to serialize degrades to
/// an inline placeholder the same way provider failures do.
async fn narrative(records: &[FlightRecord]) -> String {
    let capped = &records[..records.len().min(fare_radar_ai::MAX_SAMPLE_ROWS)];
    match codec::to_csv_string(capped) {
        Ok(sample) => fare_radar_ai::narrative_for_sample(&sample).await,
        Err(e) => {
            log::error!("Failed to serialize narrative sample: {e}");
            format!("CSV read error: {e}")
        }
    }
}
