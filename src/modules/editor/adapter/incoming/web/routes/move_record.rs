use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::modules::content::application::ContentRepository;
use crate::modules::content::domain::Direction;
use crate::modules::editor::domain::EditorTab;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub direction: Direction,
}

/// Ids of the reordered list after the move. Moves at an edge or on an
/// unknown id leave the order unchanged and still succeed.
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub order: Vec<String>,
}

fn collection_order(repo: &ContentRepository, tab: EditorTab) -> Vec<String> {
    match tab {
        EditorTab::Projects => repo.projects().iter().map(|p| p.id.clone()).collect(),
        EditorTab::Timeline => repo.timeline().iter().map(|t| t.id.clone()).collect(),
        EditorTab::Gallery => repo.gallery().iter().map(|g| g.id.clone()).collect(),
        EditorTab::Settings => Vec::new(),
    }
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

/// Registered before [`move_record_handler`] so `sections` is not read as a tab.
#[post("/admin/sections/{section_id}/move")]
pub async fn move_section_handler(
    path: web::Path<String>,
    req: web::Json<MoveRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let section_id = path.into_inner();
    let mut cms = data.cms.lock().await;

    match cms.repository.move_section(&section_id, req.direction) {
        Ok(()) => ApiResponse::success(OrderResponse {
            order: cms.repository.section_order().to_vec(),
        }),
        Err(e) => {
            error!("Storage error moving section {}: {}", section_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[post("/admin/{tab}/{record_id}/move")]
pub async fn move_record_handler(
    path: web::Path<(EditorTab, String)>,
    req: web::Json<MoveRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (tab, record_id) = path.into_inner();
    let direction = req.direction;
    let mut cms = data.cms.lock().await;
    let repo = &mut cms.repository;

    let result = match tab {
        EditorTab::Projects => repo.move_project(&record_id, direction),
        EditorTab::Timeline => repo.move_timeline_entry(&record_id, direction),
        EditorTab::Gallery => repo.move_gallery_item(&record_id, direction),
        EditorTab::Settings => {
            return ApiResponse::bad_request("NOT_ORDERABLE", "Global settings have no order")
        }
    };

    match result {
        Ok(()) => ApiResponse::success(OrderResponse {
            order: collection_order(repo, tab),
        }),
        Err(e) => {
            error!("Storage error moving {} {}: {}", tab, record_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    macro_rules! move_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(TestAppStateBuilder::default().build())
                    .service(move_section_handler)
                    .service(move_record_handler),
            )
            .await
        };
    }

    fn move_req(uri: &str, direction: &str) -> test::TestRequest {
        test::TestRequest::post()
            .uri(uri)
            .set_json(json!({ "direction": direction }))
    }

    #[actix_web::test]
    async fn test_move_project_up_swaps_with_previous() {
        let app = move_app!();

        let req = move_req("/admin/projects/infra-pulse/move", "up").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["order"][0], "infra-pulse");
        assert_eq!(body["data"]["order"][1], "neural-vis");
    }

    #[actix_web::test]
    async fn test_move_first_up_is_noop() {
        let app = move_app!();

        let req = move_req("/admin/timeline/time-2023/move", "up").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body["data"]["order"],
            json!(["time-2023", "time-2021", "time-2018"])
        );
    }

    #[actix_web::test]
    async fn test_move_gallery_item_down() {
        let app = move_app!();

        let req = move_req("/admin/gallery/gal-aurora/move", "down").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["order"][1], "gal-aurora");
    }

    #[actix_web::test]
    async fn test_move_section_down() {
        let app = move_app!();

        let req = move_req("/admin/sections/projects/move", "down").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body["data"]["order"],
            json!(["hero", "about", "timeline", "projects", "gallery", "contact"])
        );
    }

    #[actix_web::test]
    async fn test_settings_are_not_orderable() {
        let app = move_app!();

        let req = move_req("/admin/settings/global/move", "up").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_invalid_direction_is_rejected() {
        let app = move_app!();

        let req = move_req("/admin/projects/neural-vis/move", "sideways").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_client_error());
    }
}
