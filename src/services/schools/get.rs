use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SchoolService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_school(
    service: &SchoolService,
    request: &HttpRequest,
    school_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_school_by_id(&school_id).await {
        Ok(Some(school)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            school,
            "School retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SchoolNotFound,
            "School not found",
        ))),
        Err(e) => {
            error!("Failed to get school by id: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching school",
                )),
            )
        }
    }
}
