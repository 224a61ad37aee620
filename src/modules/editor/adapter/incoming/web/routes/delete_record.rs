use actix_web::{post, web, Responder};

use crate::modules::editor::adapter::incoming::web::routes::error_response::editor_error_response;
use crate::modules::editor::adapter::incoming::web::routes::get_session::SessionView;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

/// First step: records the request. Nothing is deleted until confirmed.
#[post("/admin/session/delete")]
pub async fn request_delete_handler(data: web::Data<AppState>) -> impl Responder {
    let mut cms = data.cms.lock().await;

    match cms.session.request_delete() {
        Ok(_) => ApiResponse::success(SessionView::of(&cms)),
        Err(e) => editor_error_response(e),
    }
}

#[post("/admin/session/delete/confirm")]
pub async fn confirm_delete_handler(data: web::Data<AppState>) -> impl Responder {
    let mut cms = data.cms.lock().await;
    let cms = &mut *cms;

    match cms.session.confirm_delete(&mut cms.repository) {
        Ok(()) => ApiResponse::success(SessionView::of(cms)),
        Err(e) => editor_error_response(e),
    }
}

#[post("/admin/session/delete/cancel")]
pub async fn cancel_delete_handler(data: web::Data<AppState>) -> impl Responder {
    let mut cms = data.cms.lock().await;
    cms.session.cancel_delete();
    ApiResponse::success(SessionView::of(&cms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::modules::editor::adapter::incoming::web::routes::{
        select_record_handler, select_tab_handler,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    /* --------------------------------------------------
     * Helpers
     * -------------------------------------------------- */

    macro_rules! delete_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(TestAppStateBuilder::default().build())
                    .service(select_tab_handler)
                    .service(select_record_handler)
                    .service(request_delete_handler)
                    .service(confirm_delete_handler)
                    .service(cancel_delete_handler),
            )
            .await
        };
    }

    fn admin_post(uri: &str) -> test::TestRequest {
        test::TestRequest::post().uri(uri)
    }

    fn select(id: &str) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/admin/session/select")
            .set_json(json!({ "id": id }))
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_request_then_confirm_deletes_record() {
        let app = delete_app!();
        test::call_service(&app, select("infra-pulse").to_request()).await;

        let body: Value =
            test::call_and_read_body_json(&app, admin_post("/admin/session/delete").to_request()).await;
        assert_eq!(body["data"]["pendingDelete"]["recordId"], "infra-pulse");
        assert!(body["data"]["records"]
            .as_array()
            .unwrap()
            .iter()
            .any(|r| r["id"] == "infra-pulse"));

        let resp = test::call_service(&app, admin_post("/admin/session/delete/confirm").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["state"]["mode"], "idle");
        assert!(body["data"]["pendingDelete"].is_null());
        assert!(!body["data"]["records"]
            .as_array()
            .unwrap()
            .iter()
            .any(|r| r["id"] == "infra-pulse"));
    }

    #[actix_web::test]
    async fn test_cancel_keeps_record() {
        let app = delete_app!();
        test::call_service(&app, select("infra-pulse").to_request()).await;
        test::call_service(&app, admin_post("/admin/session/delete").to_request()).await;

        let body: Value =
            test::call_and_read_body_json(&app, admin_post("/admin/session/delete/cancel").to_request()).await;
        assert!(body["data"]["pendingDelete"].is_null());

        let resp = test::call_service(&app, admin_post("/admin/session/delete/confirm").to_request()).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn test_settings_delete_is_rejected() {
        let app = delete_app!();
        let tab = test::TestRequest::post()
            .uri("/admin/session/tab")
            .set_json(json!({ "tab": "settings" }))
            .to_request();
        test::call_service(&app, tab).await;
        test::call_service(&app, select("global").to_request()).await;

        let resp = test::call_service(&app, admin_post("/admin/session/delete").to_request()).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }
}
