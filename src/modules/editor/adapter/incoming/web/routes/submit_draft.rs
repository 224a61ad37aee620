use actix_web::{post, web, Responder};

use crate::modules::editor::adapter::incoming::web::routes::error_response::editor_error_response;
use crate::modules::editor::adapter::incoming::web::routes::get_session::SessionView;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/admin/session/submit")]
pub async fn submit_draft_handler(data: web::Data<AppState>) -> impl Responder {
    let mut cms = data.cms.lock().await;
    let cms = &mut *cms;

    match cms.session.submit(&mut cms.repository) {
        Ok(_) => ApiResponse::success(SessionView::of(cms)),
        Err(e) => editor_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::modules::content::application::content_repository::PROJECTS_KEY;
    use crate::modules::editor::adapter::incoming::web::routes::{
        select_record_handler, update_draft_handler,
    };
    use crate::modules::storage::adapter::outgoing::InMemoryKeyValueStore;
    use crate::modules::storage::application::ports::outgoing::KeyValueStore;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::FailingKeyValueStore;
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_create_flow_persists_new_project_first() {
        let backend = Arc::new(InMemoryKeyValueStore::new());
        let app_state = TestAppStateBuilder::default()
            .with_shared_backend(backend.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(select_record_handler)
                .service(update_draft_handler)
                .service(submit_draft_handler),
        )
        .await;

        let select = test::TestRequest::post()
            .uri("/admin/session/select")
            .set_json(json!({}))
            .to_request();
        test::call_service(&app, select).await;

        let draft = test::TestRequest::put()
            .uri("/admin/session/draft")
            .set_json(json!({ "title": "Neural Vis", "category": "AI", "tags": "Rust, Wasm" }))
            .to_request();
        test::call_service(&app, draft).await;

        let submit = test::TestRequest::post()
            .uri("/admin/session/submit")
            .to_request();
        let resp = test::call_service(&app, submit).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let new_id = body["data"]["form"]["recordId"].as_str().unwrap().to_string();
        assert!(new_id.starts_with("proj-"));
        assert_eq!(body["data"]["records"][0]["id"], new_id.as_str());

        let stored: Value =
            serde_json::from_str(&backend.get(PROJECTS_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(stored[0]["id"], new_id.as_str());
        assert_eq!(stored[0]["tags"], json!(["Rust", "Wasm"]));
    }

    #[actix_web::test]
    async fn test_submit_with_unknown_field_is_bad_request() {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(select_record_handler)
                .service(update_draft_handler)
                .service(submit_draft_handler),
        )
        .await;

        let select = test::TestRequest::post()
            .uri("/admin/session/select")
            .set_json(json!({ "id": "neural-vis" }))
            .to_request();
        test::call_service(&app, select).await;

        let draft = test::TestRequest::put()
            .uri("/admin/session/draft")
            .set_json(json!({ "title": "x", "stars": 5 }))
            .to_request();
        test::call_service(&app, draft).await;

        let submit = test::TestRequest::post()
            .uri("/admin/session/submit")
            .to_request();
        let resp = test::call_service(&app, submit).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_storage_failure_is_internal_error() {
        let app_state = TestAppStateBuilder::default()
            .with_backend(FailingKeyValueStore)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(select_record_handler)
                .service(submit_draft_handler),
        )
        .await;

        let select = test::TestRequest::post()
            .uri("/admin/session/select")
            .set_json(json!({ "id": "neural-vis" }))
            .to_request();
        test::call_service(&app, select).await;

        let submit = test::TestRequest::post()
            .uri("/admin/session/submit")
            .to_request();
        let resp = test::call_service(&app, submit).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
