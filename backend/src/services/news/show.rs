use crate::error::NewsError;
use crate::store::ArticleStore;
use crate::views;
use actix_web::{web, HttpResponse};
use common::model::article::Article;

/// Actix web handler for `GET /news/{id}`: the article rendered as HTML.
///
/// # Returns
/// - `200 OK` with the article page.
/// - `404 Not Found` when no article has this id.
pub async fn process(
    store: web::Data<ArticleStore>,
    id: web::Path<i64>,
) -> Result<HttpResponse, NewsError> {
    let article = show_article(&store, id.into_inner()).await?;
    Ok(views::html(views::news::article_page(&article)))
}

pub async fn show_article(store: &ArticleStore, id: i64) -> Result<Article, NewsError> {
    store.find(id).await?.ok_or(NewsError::NotFound(id))
}
