use actix_web::{post, web, HttpResponse};
use chrono::Local;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{require_field, CompleteRequest, CompleteResponse};

/// Incremental entry point: one completion call for one segment. The
/// client drives the loop, observes progress after every part, and may
/// stop between parts.
#[post("/api/complete")]
pub async fn complete(
    req: web::Json<CompleteRequest>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();

    require_field("apiKey", &req.api_key)?;
    require_field("prompt", &req.prompt)?;
    require_field("segment", &req.segment)?;

    info!(
        "Completing part {}/{} with model {}",
        req.part_number, req.total_parts, req.model
    );

    let result = state
        .relay
        .complete_segment(&req.api_key, &req.model, &req.prompt, &req.segment)
        .await?;

    Ok(HttpResponse::Ok().json(CompleteResponse {
        result,
        part_number: req.part_number,
        total_parts: req.total_parts,
        timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    }))
}
