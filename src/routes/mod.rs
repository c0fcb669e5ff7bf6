//! JSON HTTP handlers for the client book.

use actix_web::HttpResponse;
use serde_json::json;

use crate::services::ServiceError;

pub mod api;
pub mod client;

/// Maps a service failure onto an HTTP status with a JSON error body.
pub fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(json!({ "error": err.to_string() })),
        ServiceError::Form(_) | ServiceError::TypeConstraint(_) => {
            HttpResponse::BadRequest().json(json!({ "error": err.to_string() }))
        }
        ServiceError::Repository(_) => {
            log::error!("Request failed: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;

    use super::*;
    use crate::repository::errors::RepositoryError;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(
            error_response(ServiceError::NotFound).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            error_response(ServiceError::Form("bad".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_response(ServiceError::TypeConstraint("bad".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_response(ServiceError::Repository(RepositoryError::Unexpected(
                "boom".into()
            )))
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
