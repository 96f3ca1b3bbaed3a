//! HTTP handler functions for the hospital fragility API.

use std::panic::{AssertUnwindSafe, catch_unwind};

use actix_web::{HttpResponse, web};
use hospital_fragility_metrics_models::RiskLevel;
use hospital_fragility_query::{ErrorKind, HospitalIndex, ListOptions, QueryError};
use hospital_fragility_server_models::{
    ApiError, ApiHealth, ApiLegendEntry, DetailQueryParams, HospitalsQueryParams,
};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/hospitals`
///
/// Returns the summary when `type=summary`, otherwise a listing filtered
/// by `iso3` or, failing that, `riskLevel`. `sortBy`/`order` reorder the
/// listing.
pub async fn hospitals(
    state: web::Data<AppState>,
    params: web::Query<HospitalsQueryParams>,
) -> HttpResponse {
    guarded("hospitals", || list_hospitals(&state.index, &params))
}

/// `GET /api/hospital-detail`
///
/// Returns the extended detail view for `id`.
pub async fn hospital_detail(
    state: web::Data<AppState>,
    params: web::Query<DetailQueryParams>,
) -> HttpResponse {
    guarded("hospital detail", || {
        let id = params.id.as_deref().unwrap_or_default();
        log::debug!("Building detail for '{id}'");
        let detail = state.index.get_detail(id)?;
        Ok(HttpResponse::Ok().json(detail))
    })
}

/// `GET /api/legend`
///
/// Lists the risk tiers with their lower thresholds and colors.
pub async fn legend() -> HttpResponse {
    let entries: Vec<ApiLegendEntry> = RiskLevel::all()
        .iter()
        .copied()
        .map(ApiLegendEntry::from)
        .collect();

    HttpResponse::Ok().json(entries)
}

fn list_hospitals(
    index: &HospitalIndex,
    params: &HospitalsQueryParams,
) -> Result<HttpResponse, QueryError> {
    if params.wants_summary() {
        return Ok(HttpResponse::Ok().json(index.summary()));
    }

    let options = ListOptions::from_params(
        params.iso3.as_deref(),
        params.risk_level.as_deref(),
        params.sort_by.as_deref(),
        params.order.as_deref(),
    )?;
    let records = index.list(&options);

    log::debug!("Returning {} hospitals", records.len());

    Ok(HttpResponse::Ok().json(records))
}

/// Runs a query, mapping its error to a 400/404 and any panic to a
/// generic 500.
fn guarded<F>(operation: &str, f: F) -> HttpResponse
where
    F: FnOnce() -> Result<HttpResponse, QueryError>,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(response)) => response,
        Ok(Err(e)) => {
            log::debug!("Rejected {operation} request: {e}");
            let body = ApiError::new(e.to_string());
            match e.kind() {
                ErrorKind::BadRequest => HttpResponse::BadRequest().json(body),
                ErrorKind::NotFound => HttpResponse::NotFound().json(body),
            }
        }
        Err(_) => {
            log::error!("Unexpected fault while fetching {operation}");
            HttpResponse::InternalServerError()
                .json(ApiError::new(format!("Failed to fetch {operation}")))
        }
    }
}
