use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SchoolService;
use crate::models::common::BulkDeleteRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_school(
    service: &SchoolService,
    request: &HttpRequest,
    school_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_school(&school_id).await {
        Ok(true) => {
            info!("School {} deleted", school_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("School deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SchoolNotFound,
            "School not found",
        ))),
        Err(e) => {
            error!("Failed to delete school: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to delete school: {e}"),
                )),
            )
        }
    }
}

pub async fn bulk_delete_schools(
    service: &SchoolService,
    request: &HttpRequest,
    delete_data: BulkDeleteRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if delete_data.ids.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "No school ids provided",
        )));
    }

    match storage.bulk_delete_schools(&delete_data.ids).await {
        Ok(deleted) => {
            info!("Bulk deleted {} school(s)", deleted);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                deleted,
                "Schools deleted successfully",
            )))
        }
        Err(e) => {
            error!("Failed to bulk delete schools: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to bulk delete schools: {e}"),
                )),
            )
        }
    }
}
