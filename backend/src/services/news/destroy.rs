use crate::error::NewsError;
use crate::store::ArticleStore;
use actix_web::http::header;
use actix_web::{web, HttpResponse};
use log::info;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Deleted {
    message: String,
}

/// Actix web handler for `DELETE /news/{id}`.
///
/// # Returns
/// - `200 OK` with a confirmation message.
/// - `404 Not Found` when the article does not exist (or was already deleted).
pub async fn process(
    store: web::Data<ArticleStore>,
    id: web::Path<i64>,
) -> Result<HttpResponse, NewsError> {
    let id = id.into_inner();
    delete_article(&store, id).await?;
    Ok(HttpResponse::Ok().json(Deleted {
        message: format!("news {id} deleted"),
    }))
}

/// `POST /news/{id}/delete`, used by the HTML table: deletes and sends the
/// browser back to the table.
pub async fn process_form(
    store: web::Data<ArticleStore>,
    id: web::Path<i64>,
) -> Result<HttpResponse, NewsError> {
    delete_article(&store, id.into_inner()).await?;
    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/news/table"))
        .finish())
}

/// Permanently removes the article.
pub async fn delete_article(store: &ArticleStore, id: i64) -> Result<(), NewsError> {
    if !store.delete(id).await? {
        return Err(NewsError::NotFound(id));
    }
    info!("deleted news {}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::resource::list_articles;
    use super::super::test_support::seeded_store;
    use super::*;
    use crate::services::news::test_support::routes;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use common::requests::ListQuery;

    #[actix_web::test]
    async fn delete_twice_is_success_then_not_found() {
        let (store, seeded) = seeded_store(&["keep", "drop"]).await;
        let id = seeded[1].id;

        delete_article(&store, id).await.unwrap();
        assert!(matches!(
            delete_article(&store, id).await,
            Err(NewsError::NotFound(missing)) if missing == id
        ));

        let page = list_articles(&store, &ListQuery::default()).await.unwrap();
        assert_eq!(page.total, 1);
        assert!(page.data.iter().all(|a| a.id != id));
    }

    #[actix_web::test]
    async fn http_delete_and_form_delete() {
        let (store, seeded) = seeded_store(&["one", "two"]).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .configure(routes),
        )
        .await;

        let uri = format!("/news/{}", seeded[0].id);
        let req = test::TestRequest::delete().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let req = test::TestRequest::delete().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], 404);

        let req = test::TestRequest::post()
            .uri(&format!("/news/{}/delete", seeded[1].id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/news/table");

        let req = test::TestRequest::get().uri("/news").to_request();
        let all: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(all, serde_json::json!([]));
    }
}
