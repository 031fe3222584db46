//! # News Service Module
//!
//! Every endpoint of the news resource lives under `/news`. Each sub-module
//! holds one operation: an actix handler named `process` plus the plain
//! async function that does the work against the `ArticleStore`, so the
//! logic can be tested without going through HTTP.
//!
//! ## Sub-modules:
//! - `index`: the raw, unpaginated JSON list.
//! - `resource`: the paginated, keyword-filtered JSON listing.
//! - `search`: title substring search.
//! - `save`: article creation from JSON or the HTML form.
//! - `show`: one article rendered as HTML.
//! - `destroy`: permanent removal.
//! - `pages`: the HTML table, watch, create and JSON-links views.

mod destroy;
mod index;
mod pages;
mod resource;
mod save;
mod search;
mod show;

use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;

/// The base path for all news endpoints.
const API_PATH: &str = "/news";

/// Configures and returns the Actix `Scope` for the news routes.
///
/// # Registered Routes:
///
/// *   **`GET /news`**: every article as a JSON array.
/// *   **`POST /news`**: creates an article from a JSON or form body.
/// *   **`GET /news/create`**: the HTML create form.
/// *   **`GET /news/table`**: HTML table of every article with delete buttons.
/// *   **`GET /news/watch`**: HTML cards of every article.
/// *   **`GET /news/json`**: HTML page linking to the JSON endpoints.
/// *   **`GET /news/resource?page&pageSize&q`**: one page of articles, most
///     recent first, optionally filtered by keyword.
/// *   **`GET /news/search/{content}`**: articles whose title contains `content`.
/// *   **`GET /news/{id}`**: one article as HTML.
/// *   **`DELETE /news/{id}`**: removes an article.
/// *   **`POST /news/{id}/delete`**: removes an article from the HTML table.
///
/// The fixed paths are registered before `/{id}` so they are never captured
/// as an id.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(index::process))
        .route("", post().to(save::process))
        .route("/create", get().to(pages::create_form))
        .route("/table", get().to(pages::table))
        .route("/watch", get().to(pages::watch))
        .route("/json", get().to(pages::json_links))
        .route("/resource", get().to(resource::process))
        .route("/search/{content}", get().to(search::process))
        .route("/{id}", get().to(show::process))
        .route("/{id}", delete().to(destroy::process))
        .route("/{id}/delete", post().to(destroy::process_form))
}
