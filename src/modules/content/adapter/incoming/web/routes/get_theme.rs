use actix_web::{get, web, Responder};
use serde::Serialize;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeResponse {
    pub accent_color: String,
    /// Space-separated RGB channels for the `--accent` CSS variable.
    pub accent_channels: Option<String>,
}

#[get("/api/theme")]
pub async fn get_theme_handler(data: web::Data<AppState>) -> impl Responder {
    let accent_color = data.cms.lock().await.repository.settings().accent_color.clone();

    ApiResponse::success(ThemeResponse {
        accent_color,
        accent_channels: data.accent.current(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;

    use crate::modules::content::application::content_repository::SETTINGS_KEY;
    use crate::modules::storage::adapter::outgoing::InMemoryKeyValueStore;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn test_theme_exposes_default_accent() {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(app_state).service(get_theme_handler)).await;

        let req = test::TestRequest::get().uri("/api/theme").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["accentColor"], "#14b8a6");
        assert_eq!(body["data"]["accentChannels"], "20 184 166");
    }

    #[actix_web::test]
    async fn test_invalid_persisted_accent_has_no_channels() {
        let backend =
            InMemoryKeyValueStore::new().with_entry(SETTINGS_KEY, r#"{"accentColor":"teal"}"#);
        let app_state = TestAppStateBuilder::default().with_backend(backend).build();
        let app = test::init_service(App::new().app_data(app_state).service(get_theme_handler)).await;

        let req = test::TestRequest::get().uri("/api/theme").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["accentColor"], "teal");
        assert!(body["data"]["accentChannels"].is_null());
    }
}
