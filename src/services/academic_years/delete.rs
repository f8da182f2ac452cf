use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AcademicYearService;
use crate::models::common::BulkDeleteRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_academic_year(
    service: &AcademicYearService,
    request: &HttpRequest,
    year_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_academic_year(&year_id).await {
        Ok(true) => {
            info!("Academic year {} deleted", year_id);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success_empty("Academic year deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AcademicYearNotFound,
            "Academic year not found",
        ))),
        Err(e) => {
            error!("Failed to delete academic year: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to delete academic year: {e}"),
                )),
            )
        }
    }
}

pub async fn bulk_delete_academic_years(
    service: &AcademicYearService,
    request: &HttpRequest,
    delete_data: BulkDeleteRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if delete_data.ids.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "No academic year ids provided",
        )));
    }

    match storage.bulk_delete_academic_years(&delete_data.ids).await {
        Ok(deleted) => {
            info!("Bulk deleted {} academic year(s)", deleted);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                deleted,
                "Academic years deleted successfully",
            )))
        }
        Err(e) => {
            error!("Failed to bulk delete academic years: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to bulk delete academic years: {e}"),
                )),
            )
        }
    }
}
