use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{SubjectScopePath, SummativeService, resolve_subject_scope};
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_summative(
    service: &SummativeService,
    request: &HttpRequest,
    (school_id, say_id, subject_id): SubjectScopePath,
    summative_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = resolve_subject_scope(&storage, &school_id, &say_id, &subject_id).await {
        return Ok(resp);
    }

    match storage.get_summative(&subject_id, &summative_id).await {
        Ok(Some(summative)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            summative,
            "Summative retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SummativeNotFound,
            "Summative not found",
        ))),
        Err(e) => {
            error!("Failed to get summative by id: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching summative",
                )),
            )
        }
    }
}
