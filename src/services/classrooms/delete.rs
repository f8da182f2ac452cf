use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{ClassroomService, ScopePath};
use crate::models::common::BulkDeleteRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::resolve_scope;

pub async fn delete_classroom(
    service: &ClassroomService,
    request: &HttpRequest,
    (school_id, say_id): ScopePath,
    classroom_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = resolve_scope(&storage, &school_id, &say_id).await {
        return Ok(resp);
    }

    match storage.delete_classroom(&say_id, &classroom_id).await {
        Ok(true) => {
            info!("Classroom {} deleted", classroom_id);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success_empty("Classroom deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassroomNotFound,
            "Classroom not found",
        ))),
        Err(e) => {
            error!("Failed to delete classroom: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to delete classroom: {e}"),
                )),
            )
        }
    }
}

pub async fn bulk_delete_classrooms(
    service: &ClassroomService,
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
            "No classroom ids provided",
        )));
    }

    match storage
        .bulk_delete_classrooms(&say_id, &delete_data.ids)
        .await
    {
        Ok(deleted) => {
            info!("Bulk deleted {} classroom(s)", deleted);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                deleted,
                "Classrooms deleted successfully",
            )))
        }
        Err(e) => {
            error!("Failed to bulk delete classrooms: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to bulk delete classrooms: {e}"),
                )),
            )
        }
    }
}
