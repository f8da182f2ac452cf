use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SchoolAcademicYearService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn activate_school_academic_year(
    service: &SchoolAcademicYearService,
    request: &HttpRequest,
    school_id: String,
    say_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .activate_school_academic_year(&school_id, &say_id)
        .await
    {
        Ok(Some(say)) => {
            info!("School academic year {} activated", say_id);
            let cache = service.get_cache(request);
            cache
                .remove(&SchoolAcademicYearService::options_cache_key(&school_id))
                .await;
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                say,
                "School academic year activated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AcademicYearNotFound,
            "School academic year not found for this school",
        ))),
        Err(e) => {
            error!("Failed to activate school academic year: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to activate school academic year: {e}"),
                )),
            )
        }
    }
}
