use crate::error::NewsError;
use crate::store::ArticleStore;
use crate::views;
use actix_web::{web, HttpResponse};
use common::requests::NewArticleRequest;
use serde::Deserialize;

use super::save::REGISTERED_MESSAGE;

#[derive(Debug, Default, Deserialize)]
pub struct CreateFormQuery {
    #[serde(default)]
    registered: bool,
}

/// `GET /news/table`: every article in an HTML table.
pub async fn table(store: web::Data<ArticleStore>) -> Result<HttpResponse, NewsError> {
    let articles = store.all().await?;
    Ok(views::html(views::news::table_page(&articles)))
}

/// `GET /news/watch`: every article as a card.
pub async fn watch(store: web::Data<ArticleStore>) -> Result<HttpResponse, NewsError> {
    let articles = store.all().await?;
    Ok(views::html(views::news::watch_page(&articles)))
}

/// `GET /news/json`: links to the JSON endpoints.
pub async fn json_links() -> HttpResponse {
    views::html(views::news::json_page())
}

/// `GET /news/create`: the empty create form, with a notice after a
/// successful submission.
pub async fn create_form(query: web::Query<CreateFormQuery>) -> HttpResponse {
    let notice = query.registered.then_some(REGISTERED_MESSAGE);
    views::html(views::news::create_page(
        &NewArticleRequest::default(),
        &[],
        notice,
    ))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::seeded_store;
    use crate::services::news::test_support::routes;
    use actix_web::dev::ServiceResponse;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};

    async fn html_body(resp: ServiceResponse) -> String {
        assert_eq!(resp.status(), StatusCode::OK);
        String::from_utf8(test::read_body(resp).await.to_vec()).unwrap()
    }

    #[actix_web::test]
    async fn html_views_list_articles() {
        let (store, seeded) = seeded_store(&["Economy News", "Sports Update"]).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/news/table").to_request();
        let table = html_body(test::call_service(&app, req).await).await;
        assert!(table.contains("Economy News"));
        assert!(table.contains(&format!("/news/{}/delete", seeded[1].id)));

        let req = test::TestRequest::get().uri("/news/watch").to_request();
        let watch = html_body(test::call_service(&app, req).await).await;
        assert!(watch.contains("Sports Update"));

        let req = test::TestRequest::get().uri("/news/json").to_request();
        let links = html_body(test::call_service(&app, req).await).await;
        assert!(links.contains(r#"href="/news/resource?page=1&amp;pageSize=20""#));

        let req = test::TestRequest::get().uri("/news/create").to_request();
        let form = html_body(test::call_service(&app, req).await).await;
        assert!(form.contains(r#"name="url_image""#));
        assert!(!form.contains("registered successfully"));

        let req = test::TestRequest::get().uri("/news/create?registered=true").to_request();
        let form = html_body(test::call_service(&app, req).await).await;
        assert!(form.contains("Article registered successfully"));
    }

    #[actix_web::test]
    async fn empty_table_says_so() {
        let (store, _) = seeded_store(&[]).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .configure(routes),
        )
        .await;
        let req = test::TestRequest::get().uri("/news/table").to_request();
        let table = html_body(test::call_service(&app, req).await).await;
        assert!(table.contains("There is no recorded news"));
    }
}
