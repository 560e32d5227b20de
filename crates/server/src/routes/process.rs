use actix_web::{post, web, HttpResponse};
use std::time::Duration;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{require_field, ProcessRequest, ProcessResponse};
use textrelay_split::{SplitConfig, SplitMethod, ZeroMarkerPolicy};

/// Batch entry point: split the document, relay every segment in order,
/// return all results or the first failure. Marker mode is tolerant here:
/// a document without markers is processed as one part.
#[post("/api/process")]
pub async fn process(
    req: web::Json<ProcessRequest>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();

    require_field("api_key", &req.api_key)?;
    require_field("prompt", &req.prompt)?;
    require_field("additional_text", &req.additional_text)?;

    let config = SplitConfig {
        method: req.split_method.parse::<SplitMethod>()?,
        language: req.language,
        budget: req.split_length,
        zero_marker: ZeroMarkerPolicy::WholeDocument,
    };
    let segments = textrelay_split::split(&req.additional_text, &config)?;

    info!(
        "Processing {} segments with model {}",
        segments.len(),
        req.model
    );

    let delay = Duration::from_millis(state.config.request_delay_ms);
    let results = textrelay_llm::relay_segments(
        &state.relay,
        &req.api_key,
        &req.model,
        &req.prompt,
        &segments,
        delay,
    )
    .await?;

    Ok(HttpResponse::Ok().json(ProcessResponse { results }))
}
