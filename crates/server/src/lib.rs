//! TextRelay HTTP Server
//!
//! Actix-web REST API: the form page, batch processing, split-only and
//! single-segment completion routes.

pub mod error;
mod routes;
mod state;
mod types;

pub use state::AppState;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use textrelay_common::{AppConfig, Result};
use tracing::info;
use tracing_actix_web::TracingLogger;

/// Start the HTTP server and block until shutdown
pub async fn start_server(config: AppConfig) -> Result<()> {
    let bind_addr = config.server_bind_address();
    let state = web::Data::new(Arc::new(AppState::new(config)));

    info!("Starting server on http://{}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(state.clone())
            .service(routes::index::index)
            .service(routes::process::process)
            .service(routes::split::split_text)
            .service(routes::complete::complete)
            .service(routes::save::save_results)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
