use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{ClassroomService, ScopePath};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::resolve_scope;

pub async fn get_classroom(
    service: &ClassroomService,
    request: &HttpRequest,
    (school_id, say_id): ScopePath,
    classroom_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = resolve_scope(&storage, &school_id, &say_id).await {
        return Ok(resp);
    }

    match storage.get_classroom(&say_id, &classroom_id).await {
        Ok(Some(classroom)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            classroom,
            "Classroom retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassroomNotFound,
            "Classroom not found",
        ))),
        Err(e) => {
            error!("Failed to get classroom by id: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching classroom",
                )),
            )
        }
    }
}
