use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{ScopePath, StudentService};
use crate::models::common::BulkDeleteRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::resolve_scope;

pub async fn delete_student(
    service: &StudentService,
    request: &HttpRequest,
    (school_id, say_id): ScopePath,
    student_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = resolve_scope(&storage, &school_id, &say_id).await {
        return Ok(resp);
    }

    match storage.delete_student(&say_id, &student_id).await {
        Ok(true) => {
            info!("Student {} deleted", student_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Student deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => {
            error!("Failed to delete student: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to delete student: {e}"),
                )),
            )
        }
    }
}

pub async fn bulk_delete_students(
    service: &StudentService,
    request: &HttpRequest,
    (school_id, say_id): ScopePath,
    delete_data: BulkDeleteRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = resolve_scope(&storage, &school_id, &say_id).await {
        return Ok(resp);
    }

    if delete_data.ids.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "No student ids provided",
        )));
    }

    match storage.bulk_delete_students(&say_id, &delete_data.ids).await {
        Ok(deleted) => {
            info!("Bulk deleted {} student(s)", deleted);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                deleted,
                "Students deleted successfully",
            )))
        }
        Err(e) => {
            error!("Failed to bulk delete students: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to bulk delete students: {e}"),
                )),
            )
        }
    }
}
