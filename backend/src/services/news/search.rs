use crate::error::NewsError;
use crate::store::ArticleStore;
use actix_web::{web, HttpResponse};
use common::model::article::Article;
use serde::Serialize;

/// Body of `GET /news/search/{content}`: the matches under a `title` key.
#[derive(Debug, Serialize)]
pub struct TitleMatches {
    pub title: Vec<Article>,
}

/// Actix web handler for `GET /news/search/{content}`.
///
/// # Arguments
/// * `content` - The substring to look for in titles.
///
/// # Returns
/// `200 OK` with the matching articles under `title`, possibly empty.
pub async fn process(
    store: web::Data<ArticleStore>,
    content: web::Path<String>,
) -> Result<HttpResponse, NewsError> {
    let title = search_by_title(&store, &content).await?;
    Ok(HttpResponse::Ok().json(TitleMatches { title }))
}

/// Every article whose title contains `keyword`; an empty list when none do.
pub async fn search_by_title(
    store: &ArticleStore,
    keyword: &str,
) -> Result<Vec<Article>, NewsError> {
    Ok(store.search_title(keyword).await?)
}
