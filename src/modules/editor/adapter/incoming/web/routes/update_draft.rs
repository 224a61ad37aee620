use actix_web::{put, web, Responder};
use serde_json::Value;

use crate::modules::editor::adapter::incoming::web::routes::error_response::editor_error_response;
use crate::modules::editor::adapter::incoming::web::routes::get_session::SessionView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Form renderer change callback: the body is the whole form data.
#[put("/admin/session/draft")]
pub async fn update_draft_handler(
    req: web::Json<Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    let mut cms = data.cms.lock().await;

    match cms.session.update_draft(req.into_inner()) {
        Ok(()) => ApiResponse::success(SessionView::of(&cms)),
        Err(e) => editor_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn test_draft_without_open_record_conflicts() {
        let app_state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(app_state).service(update_draft_handler)).await;

        let req = test::TestRequest::put()
            .uri("/admin/session/draft")
            .set_json(json!({ "title": "x" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_STATE");
    }
}
