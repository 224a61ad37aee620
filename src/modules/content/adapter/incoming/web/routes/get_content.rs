use actix_web::{get, web, Responder};

use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public read model: everything the site renders, in display order.
#[get("/api/content")]
pub async fn get_content_handler(data: web::Data<AppState>) -> impl Responder {
    let cms = data.cms.lock().await;
    ApiResponse::success(cms.repository.snapshot())
}
