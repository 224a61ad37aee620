use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::modules::editor::adapter::incoming::web::routes::error_response::editor_error_response;
use crate::modules::editor::adapter::incoming::web::routes::get_session::SessionView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Omitting `id` (or sending null) starts a new record.
#[derive(Debug, Default, Deserialize)]
pub struct SelectRecordRequest {
    #[serde(default)]
    pub id: Option<String>,
}

#[post("/admin/session/select")]
pub async fn select_record_handler(
    req: web::Json<SelectRecordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let mut cms = data.cms.lock().await;
    let cms = &mut *cms;

    match cms.session.select_record(&cms.repository, req.id.as_deref()) {
        Ok(()) => ApiResponse::success(SessionView::of(cms)),
        Err(e) => editor_error_response(e),
    }
}
