use actix_web::{post, web, HttpResponse};
use chrono::Local;
use textrelay_common::TextRelayError;

use crate::error::ApiError;
use crate::types::{join_results, SaveRequest, SaveResponse};

/// Download formatting: join results into one document and hand it back
/// with a timestamped filename. The client saves the file itself; the
/// server keeps no state.
#[post("/api/save")]
pub async fn save_results(req: web::Json<SaveRequest>) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();

    if req.results.is_empty() {
        return Err(TextRelayError::missing_field("results").into());
    }

    let timestamp = Local::now().format("%Y-%m-%d-%H-%M-%S").to_string();

    Ok(HttpResponse::Ok().json(SaveResponse {
        content: join_results(&req.results),
        filename: format!("textrelay_result_{}.txt", timestamp),
        timestamp,
    }))
}
