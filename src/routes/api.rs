use crate::error::ApiError;
use crate::models::{PackageDetail, PackageSummary, RegistryStats, RegistryStatus};
use crate::services::{AggregationService, DetailService};
use crate::state::AppState;
use log::{error, info};
use rocket::http::Status;
use rocket::http::uri::{Segments, fmt::Path};
use rocket::serde::json::Json;
use rocket::{Request, State, catch, get};

/// Liveness plus a package count. A database failure still answers with the
/// status shape, marked `ERROR`.
#[get("/api/status")]
pub async fn status(state: &State<AppState>) -> (Status, Json<RegistryStatus>) {
    match AggregationService::get_registry_status(state.store()) {
        Ok(status) => (Status::Ok, Json(status)),
        Err(e) => {
            error!("Status check could not reach the database: {e}");
            (
                Status::InternalServerError,
                Json(RegistryStatus::database_error(e.to_string())),
            )
        }
    }
}

#[get("/api/stats")]
pub async fn stats(state: &State<AppState>) -> Result<Json<RegistryStats>, ApiError> {
    Ok(Json(AggregationService::get_registry_stats(state.store())?))
}

#[get("/api/packages")]
pub async fn list_packages(
    state: &State<AppState>,
) -> Result<Json<Vec<PackageSummary>>, ApiError> {
    let packages = AggregationService::list_package_summaries(state.store())?;
    info!("Listing {} packages", packages.len());
    Ok(Json(packages))
}

/// Scoped names arrive either as two segments or as one `%2F`-encoded
/// segment; both decode to the same name.
#[get("/api/packages/<name..>", rank = 2)]
pub async fn get_package(
    name: Segments<'_, Path>,
    state: &State<AppState>,
) -> Result<Json<PackageDetail>, ApiError> {
    let name = package_name(name)?;
    Ok(Json(DetailService::get_package_detail(state.store(), &name)?))
}

fn package_name(segments: Segments<'_, Path>) -> Result<String, ApiError> {
    let name = segments.collect::<Vec<_>>().join("/");
    if name.is_empty() {
        return Err(ApiError::BadRequest("Package name is required".to_string()));
    }
    Ok(name)
}

#[catch(404)]
pub fn not_found(req: &Request<'_>) -> ApiError {
    ApiError::NotFound(format!("No API route for {}", req.uri().path()))
}

#[catch(500)]
pub fn internal_error() -> ApiError {
    ApiError::InternalServerError("Internal server error".to_string())
}
