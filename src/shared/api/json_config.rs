// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

// Largest legitimate payload is a full sync batch, well under this.
const JSON_PAYLOAD_LIMIT: usize = 64 * 1024;

/// Malformed JSON bodies get the standard error envelope instead of
/// actix's plain-text 400.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(JSON_PAYLOAD_LIMIT)
        .error_handler(|err, _req| {
            let message = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}
