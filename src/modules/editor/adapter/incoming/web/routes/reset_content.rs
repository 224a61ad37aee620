use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::warn;

use crate::modules::editor::adapter::incoming::web::routes::error_response::editor_error_response;
use crate::modules::editor::adapter::incoming::web::routes::get_session::SessionView;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ResetRequest {
    #[serde(default)]
    pub confirm: bool,
}

/// Factory reset. Irreversible, so the body must say `{"confirm": true}`.
#[post("/admin/reset")]
pub async fn reset_content_handler(
    req: web::Json<ResetRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    if !req.confirm {
        return ApiResponse::bad_request(
            "CONFIRMATION_REQUIRED",
            "Resetting removes every saved change; send {\"confirm\": true}",
        );
    }

    let mut cms = data.cms.lock().await;
    let cms = &mut *cms;
    warn!("Factory reset requested from the editor");

    match cms.session.reset_all(&mut cms.repository) {
        Ok(()) => ApiResponse::success(SessionView::of(cms)),
        Err(e) => editor_error_response(e),
    }
}
