use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AcademicYearService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_academic_year(
    service: &AcademicYearService,
    request: &HttpRequest,
    year_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_academic_year_by_id(&year_id).await {
        Ok(Some(year)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            year,
            "Academic year retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AcademicYearNotFound,
            "Academic year not found",
        ))),
        Err(e) => {
            error!("Failed to get academic year by id: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching academic year",
                )),
            )
        }
    }
}
