use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AcademicYearService;
use crate::models::{
    ApiResponse, ErrorCode,
    academic_years::requests::{AcademicYearListQuery, AcademicYearQueryParams},
};

pub async fn list_academic_years(
    service: &AcademicYearService,
    request: &HttpRequest,
    query: AcademicYearQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = AcademicYearListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        search: query.search,
        semester: query.semester,
        sort: query.sort,
    };

    match storage.list_academic_years_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Academic year list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve academic year list: {e}"),
            )),
        ),
    }
}
