//! # Article Creation
//!
//! Backs `POST /news`. JSON clients get the stored article back together
//! with an acknowledgment; submissions from the HTML create form are
//! redirected to a fresh form on success, or get the form back with the
//! per-field messages and their input when validation fails.

use crate::error::NewsError;
use crate::store::ArticleStore;
use crate::views;
use actix_web::http::{header, StatusCode};
use actix_web::{web, Either, HttpResponse};
use chrono::Utc;
use common::model::article::Article;
use common::requests::NewArticleRequest;
use log::{info, warn};
use serde::Serialize;

pub const REGISTERED_MESSAGE: &str = "Article registered successfully";

#[derive(Debug, Serialize)]
pub struct Registered {
    pub message: &'static str,
    pub article: Article,
}

/// Actix web handler for `POST /news`.
///
/// # Arguments
/// * `store` - The shared article store.
/// * `payload` - The article fields, as JSON or as an urlencoded form.
///
/// # Returns
/// - JSON: `200 OK` with the acknowledgment and the stored article, or
///   `422 Unprocessable Entity` listing every invalid field.
/// - Form: `303 See Other` back to the create form, or the form itself with
///   `422` and a message under each invalid field.
pub async fn process(
    store: web::Data<ArticleStore>,
    payload: Either<web::Json<NewArticleRequest>, web::Form<NewArticleRequest>>,
) -> Result<HttpResponse, NewsError> {
    match payload {
        Either::Left(json) => {
            let article = create_article(&store, &json).await?;
            Ok(HttpResponse::Ok().json(Registered {
                message: REGISTERED_MESSAGE,
                article,
            }))
        }
        Either::Right(form) => match create_article(&store, &form).await {
            Ok(_) => Ok(HttpResponse::SeeOther()
                .insert_header((header::LOCATION, "/news/create?registered=true"))
                .finish()),
            Err(NewsError::Validation(errors)) => {
                let mut response = views::html(views::news::create_page(&form, &errors, None));
                *response.status_mut() = StatusCode::UNPROCESSABLE_ENTITY;
                Ok(response)
            }
            Err(e) => Err(e),
        },
    }
}

/// Validates the request and stores the article, stamped with the current
/// time. Nothing is written when any field is invalid.
pub async fn create_article(
    store: &ArticleStore,
    request: &NewArticleRequest,
) -> Result<Article, NewsError> {
    let article = request.validate().map_err(|errors| {
        warn!("rejected news with {} invalid field(s)", errors.len());
        NewsError::Validation(errors)
    })?;

    let stored = store.insert(article, Utc::now()).await?;
    info!("registered news {} ({})", stored.id, stored.title);
    Ok(stored)
}
