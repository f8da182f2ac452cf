use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{ScopePath, SubjectService};
use crate::models::common::BulkDeleteRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::resolve_scope;

pub async fn delete_subject(
    service: &SubjectService,
    request: &HttpRequest,
    (school_id, say_id): ScopePath,
    subject_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = resolve_scope(&storage, &school_id, &say_id).await {
        return Ok(resp);
    }

    match storage.delete_subject(&say_id, &subject_id).await {
        Ok(true) => {
            info!("Subject {} deleted", subject_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Subject deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubjectNotFound,
            "Subject not found",
        ))),
        Err(e) => {
            error!("Failed to delete subject: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to delete subject: {e}"),
                )),
            )
        }
    }
}

pub async fn bulk_delete_subjects(
    service: &SubjectService,
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
            "No subject ids provided",
        )));
    }

    match storage.bulk_delete_subjects(&say_id, &delete_data.ids).await {
        Ok(deleted) => {
            info!("Bulk deleted {} subject(s)", deleted);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                deleted,
                "Subjects deleted successfully",
            )))
        }
        Err(e) => {
            error!("Failed to bulk delete subjects: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to bulk delete subjects: {e}"),
                )),
            )
        }
    }
}
