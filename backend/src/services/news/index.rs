use crate::error::NewsError;
use crate::store::ArticleStore;
use actix_web::{web, HttpResponse};

/// Actix web handler for `GET /news`: every article as a JSON array.
pub async fn process(store: web::Data<ArticleStore>) -> Result<HttpResponse, NewsError> {
    let articles = store.all().await?;
    Ok(HttpResponse::Ok().json(articles))
}
