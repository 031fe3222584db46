pub mod news;

use crate::error::{rejected, ErrorBody};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};

/// Registers every scope together with extractor configs, so a path, query
/// or body that fails to parse still answers with an `ErrorBody`.
///
/// A path segment that is not an id is a missing article (404); the other
/// extractors keep the status actix assigns to the failure.
pub fn configure(cfg: &mut web::ServiceConfig, body_limit: usize) {
    cfg.app_data(
        web::PathConfig::default().error_handler(|err, _| rejected(err, StatusCode::NOT_FOUND)),
    )
    .app_data(web::QueryConfig::default().error_handler(|err, _| {
        let status = err.status_code();
        rejected(err, status)
    }))
    .app_data(
        web::JsonConfig::default()
            .limit(body_limit)
            .error_handler(|err, _| {
                let status = err.status_code();
                rejected(err, status)
            }),
    )
    .app_data(
        web::FormConfig::default()
            .limit(body_limit)
            .error_handler(|err, _| {
                let status = err.status_code();
                rejected(err, status)
            }),
    )
    .service(news::configure_routes());
}

/// Fallback for every path outside the registered scopes.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::new(StatusCode::NOT_FOUND, "route not found"))
}
