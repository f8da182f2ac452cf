use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AcademicYearService;
use crate::models::academic_years::requests::UpdateAcademicYearRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_academic_year_name;

pub async fn update_academic_year(
    service: &AcademicYearService,
    request: &HttpRequest,
    year_id: String,
    update_data: UpdateAcademicYearRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(ref name) = update_data.name
        && let Err(msg) = validate_academic_year_name(name)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    match storage.update_academic_year(&year_id, update_data).await {
        Ok(Some(year)) => {
            info!("Academic year {} updated", year.name);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                year,
                "Academic year updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AcademicYearNotFound,
            "Academic year not found",
        ))),
        Err(e) => {
            let msg = format!("Academic year update failed: {e}");
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
