use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ScopePath, TeacherService};
use crate::models::{
    ApiResponse, ErrorCode,
    teachers::requests::{TeacherListQuery, TeacherQueryParams},
};
use crate::services::resolve_scope;

pub async fn list_teachers(
    service: &TeacherService,
    request: &HttpRequest,
    (school_id, say_id): ScopePath,
    query: TeacherQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = resolve_scope(&storage, &school_id, &say_id).await {
        return Ok(resp);
    }

    let list_query = TeacherListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        search: query.search,
        gender: query.gender,
        sort: query.sort,
    };

    match storage
        .list_teachers_with_pagination(&say_id, list_query)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Teacher list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve teacher list: {e}"),
            )),
        ),
    }
}
