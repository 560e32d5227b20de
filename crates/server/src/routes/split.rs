use actix_web::{post, web, HttpResponse};
use tracing::info;

use crate::error::ApiError;
use crate::types::{require_field, SplitRequest, SplitResponse};
use textrelay_split::{SplitConfig, SplitMethod, ZeroMarkerPolicy};

/// Split-only entry point, no completion calls. Marker mode is strict
/// here: zero markers is an error, never a silent whole-document
/// fallback.
#[post("/api/split")]
pub async fn split_text(req: web::Json<SplitRequest>) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();

    require_field("additionalText", &req.additional_text)?;

    let config = SplitConfig {
        method: req.split_method.parse::<SplitMethod>()?,
        language: req.language,
        budget: req.split_length,
        zero_marker: ZeroMarkerPolicy::Error,
    };
    let segments = textrelay_split::split(&req.additional_text, &config)?;

    info!("Split document into {} segments", segments.len());

    let count = segments.len();
    Ok(HttpResponse::Ok().json(SplitResponse { segments, count }))
}
