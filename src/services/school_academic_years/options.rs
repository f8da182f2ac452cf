use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SchoolAcademicYearService;
use crate::cache::CacheResult;
use crate::models::school_academic_years::responses::AcademicYearOption;
use crate::models::{ApiResponse, ErrorCode};

/// 登录下拉框的学年选项
///
/// 登录页每次加载都会打这个接口，结果走对象缓存，
/// 挂接/启用/解除挂接时失效。
pub async fn list_academic_year_options(
    service: &SchoolAcademicYearService,
    request: &HttpRequest,
    school_id: String,
) -> ActixResult<HttpResponse> {
    let cache = service.get_cache(request);
    let cache_key = SchoolAcademicYearService::options_cache_key(&school_id);

    if let CacheResult::Found(options) = cache.get::<Vec<AcademicYearOption>>(&cache_key).await {
        return Ok(HttpResponse::Ok().json(ApiResponse::success(
            options,
            "Academic year options retrieved successfully",
        )));
    }

    let storage = service.get_storage(request);

    match storage.list_academic_year_options(&school_id).await {
        Ok(options) => {
            cache.insert(cache_key, &options, 0).await;
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                options,
                "Academic year options retrieved successfully",
            )))
        }
        Err(e) => {
            error!("Failed to list academic year options: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve academic year options: {e}"),
                )),
            )
        }
    }
}
