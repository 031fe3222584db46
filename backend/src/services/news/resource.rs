//! # Paginated Listing
//!
//! Backs `GET /news/resource?page&pageSize&q`. The query string is validated
//! first (`pageSize` in 1..=100, `page` at least 1, both defaulting), then the
//! store returns the total and one window of articles ordered by
//! `published_at` descending, read under the same lock. A keyword narrows both to articles mentioning
//! it in the title, author, source, content or description.
//!
//! A page past the end of the collection is an empty page, not an error.

use crate::error::NewsError;
use crate::store::ArticleStore;
use actix_web::{web, HttpResponse};
use common::model::article::Article;
use common::model::page::Page;
use common::requests::ListQuery;
use log::debug;

/// Actix web handler for `GET /news/resource`.
///
/// # Arguments
/// * `store` - The shared article store.
/// * `query` - Raw `page`, `pageSize` and `q` values from the query string.
///
/// # Returns
/// - `200 OK` with a `Page` of articles and its pagination metadata.
/// - `400 Bad Request` when `page` or `pageSize` is not an integer in range.
pub async fn process(
    store: web::Data<ArticleStore>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, NewsError> {
    let page = list_articles(&store, &query).await?;
    Ok(HttpResponse::Ok().json(page))
}

/// Validates the listing parameters and fetches the requested page.
pub async fn list_articles(
    store: &ArticleStore,
    query: &ListQuery,
) -> Result<Page<Article>, NewsError> {
    let params = query.params().inspect_err(|e| debug!("rejected listing query: {}", e))?;
    let keyword = query.keyword();

    let (total, articles) = store
        .latest_page(keyword, params.page_size, params.offset())
        .await?;

    Ok(Page::new(articles, params, total))
}
