use actix_web::{post, put, web, Responder};
use serde::Deserialize;

use crate::modules::editor::adapter::incoming::web::routes::error_response::editor_error_response;
use crate::modules::editor::adapter::incoming::web::routes::get_session::SessionView;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Raw editor text; it does not have to be valid JSON until applied.
#[derive(Debug, Deserialize)]
pub struct EditBulkJsonRequest {
    pub buffer: String,
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

#[post("/admin/session/json")]
pub async fn enter_bulk_json_handler(data: web::Data<AppState>) -> impl Responder {
    let mut cms = data.cms.lock().await;
    let cms = &mut *cms;

    match cms.session.enter_bulk_json(&cms.repository) {
        Ok(()) => ApiResponse::success(SessionView::of(cms)),
        Err(e) => editor_error_response(e),
    }
}

#[put("/admin/session/json")]
pub async fn edit_bulk_json_handler(
    req: web::Json<EditBulkJsonRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let mut cms = data.cms.lock().await;

    match cms.session.edit_bulk_json(req.into_inner().buffer) {
        Ok(()) => ApiResponse::success(SessionView::of(&cms)),
        Err(e) => editor_error_response(e),
    }
}

/// Validates the whole buffer and replaces all content, or changes nothing.
#[post("/admin/session/json/apply")]
pub async fn apply_bulk_json_handler(data: web::Data<AppState>) -> impl Responder {
    let mut cms = data.cms.lock().await;
    let cms = &mut *cms;

    match cms.session.apply_bulk_json(&mut cms.repository) {
        Ok(()) => ApiResponse::success(SessionView::of(cms)),
        Err(e) => editor_error_response(e),
    }
}
