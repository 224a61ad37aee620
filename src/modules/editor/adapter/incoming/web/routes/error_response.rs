use actix_web::HttpResponse;
use tracing::error;

use crate::modules::editor::application::EditorError;
use crate::shared::api::ApiResponse;

/// Maps an editor failure onto the API envelope.
pub fn editor_error_response(err: EditorError) -> HttpResponse {
    match err {
        EditorError::RecordNotFound { .. } => {
            ApiResponse::not_found("RECORD_NOT_FOUND", &err.to_string())
        }
        EditorError::InvalidDraft(_) => ApiResponse::bad_request("INVALID_DRAFT", &err.to_string()),
        EditorError::MalformedJson(_) => {
            ApiResponse::bad_request("MALFORMED_JSON", &err.to_string())
        }
        EditorError::NoActiveRecord
        | EditorError::NotInBulkJson
        | EditorError::NoPendingDelete
        | EditorError::SettingsNotDeletable => {
            ApiResponse::conflict("INVALID_STATE", &err.to_string())
        }
        EditorError::Validation(failure) => {
            ApiResponse::unprocessable("VALIDATION_FAILED", &failure.message, &failure.path)
        }
        EditorError::Serialization(_) | EditorError::Storage(_) => {
            error!("Editor action failed: {}", err);
            ApiResponse::internal_error()
        }
    }
}
