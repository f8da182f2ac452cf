use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SchoolService;
use crate::models::{
    ApiResponse, ErrorCode,
    schools::requests::{SchoolListQuery, SchoolQueryParams},
};

pub async fn list_schools(
    service: &SchoolService,
    request: &HttpRequest,
    query: SchoolQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = SchoolListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        search: query.search,
        level: query.level,
        sort: query.sort,
    };

    match storage.list_schools_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "School list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve school list: {e}"),
            )),
        ),
    }
}
