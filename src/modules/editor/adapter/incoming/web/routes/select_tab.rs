use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::modules::editor::adapter::incoming::web::routes::get_session::SessionView;
use crate::modules::editor::domain::EditorTab;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SelectTabRequest {
    pub tab: EditorTab,
}

#[post("/admin/session/tab")]
pub async fn select_tab_handler(
    req: web::Json<SelectTabRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let mut cms = data.cms.lock().await;
    cms.session.select_tab(req.tab);
    ApiResponse::success(SessionView::of(&cms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn test_select_settings_tab_shows_settings_form() {
        let app_state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(app_state).service(select_tab_handler)).await;

        let req = test::TestRequest::post()
            .uri("/admin/session/tab")
            .set_json(json!({ "tab": "settings" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["tab"], "settings");
        assert_eq!(body["data"]["form"]["recordId"], "global");
        assert_eq!(body["data"]["form"]["schema"]["title"], "Global settings");
    }

    #[actix_web::test]
    async fn test_unknown_tab_is_rejected() {
        let app_state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(app_state).service(select_tab_handler)).await;

        let req = test::TestRequest::post()
            .uri("/admin/session/tab")
            .set_json(json!({ "tab": "blog" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
