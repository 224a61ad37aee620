use actix_web::{get, web, Responder};
use serde::Deserialize;

use crate::modules::editor::domain::EditorTab;
use crate::modules::schema::application::schema_registry;
use crate::shared::api::ApiResponse;

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SchemaScope {
    #[default]
    Item,
    List,
}

#[derive(Debug, Deserialize)]
pub struct SchemaQuery {
    pub tab: Option<EditorTab>,
    #[serde(default)]
    pub scope: SchemaScope,
}

/// Whole document when no tab is given, otherwise the record or list schema.
#[get("/admin/schema")]
pub async fn get_schema_handler(query: web::Query<SchemaQuery>) -> impl Responder {
    let SchemaQuery { tab, scope } = query.into_inner();

    match (tab, scope) {
        (None, _) => ApiResponse::success(schema_registry::document().clone()),
        (Some(tab), SchemaScope::Item) => ApiResponse::success(schema_registry::item_schema(tab)),
        (Some(tab), SchemaScope::List) => ApiResponse::success(schema_registry::list_schema(tab)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_get_full_document() {
        let app = test::init_service(App::new().service(get_schema_handler)).await;

        let req = test::TestRequest::get().uri("/admin/schema").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["version"], schema_registry::SCHEMA_VERSION);
    }

    #[actix_web::test]
    async fn test_get_item_and_list_schema() {
        let app = test::init_service(App::new().service(get_schema_handler)).await;

        let req = test::TestRequest::get()
            .uri("/admin/schema?tab=timeline")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["type"], "object");
        assert_eq!(body["data"]["title"], "Timeline entry");

        let req = test::TestRequest::get()
            .uri("/admin/schema?tab=gallery&scope=list")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["type"], "array");
        assert_eq!(body["data"]["items"]["title"], "Gallery item");
    }

    #[actix_web::test]
    async fn test_unknown_tab_is_bad_request() {
        let app = test::init_service(App::new().service(get_schema_handler)).await;

        let req = test::TestRequest::get()
            .uri("/admin/schema?tab=blog")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
