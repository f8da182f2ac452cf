use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SchoolService;
use crate::models::schools::requests::CreateSchoolRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_npsn;

pub async fn create_school(
    service: &SchoolService,
    request: &HttpRequest,
    school_data: CreateSchoolRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // NPSN 格式校验
    if let Err(msg) = validate_npsn(&school_data.npsn) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    match storage.create_school(school_data).await {
        Ok(school) => {
            info!("School {} created successfully", school.name);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(school, "School created successfully")))
        }
        Err(e) => Ok(handle_school_create_error(&e.to_string())),
    }
}

/// 错误响应辅助函数
fn handle_school_create_error(e: &str) -> HttpResponse {
    let msg = format!("School creation failed: {e}");
    error!("{}", msg);
    if msg.contains("UNIQUE constraint failed") {
        HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::SchoolAlreadyExists,
            "A school with this NPSN already exists",
        ))
    } else {
        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            msg,
        ))
    }
}
