use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{ScopePath, StudentService};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::resolve_scope;

pub async fn get_student(
    service: &StudentService,
    request: &HttpRequest,
    (school_id, say_id): ScopePath,
    student_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = resolve_scope(&storage, &school_id, &say_id).await {
        return Ok(resp);
    }

    match storage.get_student(&say_id, &student_id).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            student,
            "Student retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => {
            error!("Failed to get student by id: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching student",
                )),
            )
        }
    }
}
