use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{ScopePath, TeacherService};
use crate::models::common::BulkDeleteRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::resolve_scope;

pub async fn delete_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    (school_id, say_id): ScopePath,
    teacher_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = resolve_scope(&storage, &school_id, &say_id).await {
        return Ok(resp);
    }

    match storage.delete_teacher(&say_id, &teacher_id).await {
        Ok(true) => {
            info!("Teacher {} deleted", teacher_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Teacher deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeacherNotFound,
            "Teacher not found",
        ))),
        Err(e) => {
            error!("Failed to delete teacher: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to delete teacher: {e}"),
                )),
            )
        }
    }
}

pub async fn bulk_delete_teachers(
    service: &TeacherService,
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
            "No teacher ids provided",
        )));
    }

    match storage.bulk_delete_teachers(&say_id, &delete_data.ids).await {
        Ok(deleted) => {
            info!("Bulk deleted {} teacher(s)", deleted);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                deleted,
                "Teachers deleted successfully",
            )))
        }
        Err(e) => {
            error!("Failed to bulk delete teachers: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to bulk delete teachers: {e}"),
                )),
            )
        }
    }
}
