use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SchoolService;
use crate::models::schools::requests::UpdateSchoolRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_npsn;

pub async fn update_school(
    service: &SchoolService,
    request: &HttpRequest,
    school_id: String,
    update_data: UpdateSchoolRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(ref npsn) = update_data.npsn
        && let Err(msg) = validate_npsn(npsn)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    match storage.update_school(&school_id, update_data).await {
        Ok(Some(school)) => {
            info!("School {} updated successfully", school.name);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(school, "School updated successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SchoolNotFound,
            "School not found",
        ))),
        Err(e) => {
            let msg = format!("School update failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::SchoolAlreadyExists,
                    "A school with this NPSN already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
