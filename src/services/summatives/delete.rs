use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{SubjectScopePath, SummativeService, resolve_subject_scope};
use crate::models::common::BulkDeleteRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_summative(
    service: &SummativeService,
    request: &HttpRequest,
    (school_id, say_id, subject_id): SubjectScopePath,
    summative_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = resolve_subject_scope(&storage, &school_id, &say_id, &subject_id).await {
        return Ok(resp);
    }

    match storage.delete_summative(&subject_id, &summative_id).await {
        Ok(true) => {
            info!("Summative {} deleted", summative_id);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success_empty("Summative deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SummativeNotFound,
            "Summative not found",
        ))),
        Err(e) => {
            error!("Failed to delete summative: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to delete summative: {e}"),
                )),
            )
        }
    }
}

pub async fn bulk_delete_summatives(
    service: &SummativeService,
    request: &HttpRequest,
    (school_id, say_id, subject_id): SubjectScopePath,
    delete_data: BulkDeleteRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = resolve_subject_scope(&storage, &school_id, &say_id, &subject_id).await {
        return Ok(resp);
    }

    if delete_data.ids.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "No summative ids provided",
        )));
    }

    match storage
        .bulk_delete_summatives(&subject_id, &delete_data.ids)
        .await
    {
        Ok(deleted) => {
            info!("Bulk deleted {} summative(s)", deleted);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                deleted,
                "Summatives deleted successfully",
            )))
        }
        Err(e) => {
            error!("Failed to bulk delete summatives: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to bulk delete summatives: {e}"),
                )),
            )
        }
    }
}
