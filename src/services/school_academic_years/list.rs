use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SchoolAcademicYearService;
use crate::models::{
    ApiResponse, ErrorCode,
    school_academic_years::requests::{SchoolAcademicYearListQuery, SchoolAcademicYearQueryParams},
};

pub async fn list_school_academic_years(
    service: &SchoolAcademicYearService,
    request: &HttpRequest,
    school_id: String,
    query: SchoolAcademicYearQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 学校必须存在
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

    let list_query = SchoolAcademicYearListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        active: query.active,
    };

    match storage
        .list_school_academic_years_with_pagination(&school_id, list_query)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "School academic year list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve school academic year list: {e}"),
            )),
        ),
    }
}

pub async fn get_school_academic_year(
    service: &SchoolAcademicYearService,
    request: &HttpRequest,
    school_id: String,
    say_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_school_academic_year(&school_id, &say_id).await {
        Ok(Some(say)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            say,
            "School academic year retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AcademicYearNotFound,
            "School academic year not found for this school",
        ))),
        Err(e) => {
            error!("Failed to get school academic year: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching school academic year",
                )),
            )
        }
    }
}
