use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AcademicYearService;
use crate::models::academic_years::requests::CreateAcademicYearRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_academic_year_name;

pub async fn create_academic_year(
    service: &AcademicYearService,
    request: &HttpRequest,
    year_data: CreateAcademicYearRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 学年名称格式校验（"YYYY/YYYY" 且连续）
    if let Err(msg) = validate_academic_year_name(&year_data.name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    match storage.create_academic_year(year_data).await {
        Ok(year) => {
            info!("Academic year {} ({}) created", year.name, year.semester);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                year,
                "Academic year created successfully",
            )))
        }
        Err(e) => {
            let msg = format!("Academic year creation failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::AcademicYearAlreadyExists,
                    "This academic year and semester already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
