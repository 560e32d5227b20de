use actix_web::{get, HttpResponse};

/// Embedded form page
const INDEX_HTML: &str = include_str!("../../static/index.html");

#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}
