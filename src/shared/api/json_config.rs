// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Admin drafts and bulk documents can be large; malformed bodies are
/// reported in the usual envelope instead of actix's plain-text error.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(1024 * 1024)
        .error_handler(|err, _req| {
            let message = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("INVALID_BODY", &message),
            )
            .into()
        })
}
