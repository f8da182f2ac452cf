use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SchoolAcademicYearService;
use crate::models::school_academic_years::requests::AttachAcademicYearRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn attach_academic_year(
    service: &SchoolAcademicYearService,
    request: &HttpRequest,
    school_id: String,
    attach_data: AttachAcademicYearRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 学校与学年都必须存在
    match storage.get_school_by_id(&school_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SchoolNotFound,
                "School not found",
            )));
        }
        Err(e) => {
            error!("Failed to get school by id: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching school",
                )),
            );
        }
    }

    match storage
        .get_academic_year_by_id(&attach_data.academic_year_id)
        .await
    {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AcademicYearNotFound,
                "Academic year not found",
            )));
        }
        Err(e) => {
            error!("Failed to get academic year by id: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching academic year",
                )),
            );
        }
    }

    match storage.attach_academic_year(&school_id, attach_data).await {
        Ok(say) => {
            info!("Academic year attached to school {}", school_id);
            // 下拉框选项缓存失效
            let cache = service.get_cache(request);
            cache
                .remove(&SchoolAcademicYearService::options_cache_key(&school_id))
                .await;
            Ok(HttpResponse::Created().json(ApiResponse::success(
                say,
                "Academic year attached successfully",
            )))
        }
        Err(e) => {
            let msg = format!("Academic year attach failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::AcademicYearAlreadyAttached,
                    "This academic year is already attached to the school",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
