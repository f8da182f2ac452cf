use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ScopePath, StudentService};
use crate::models::{
    ApiResponse, ErrorCode,
    students::requests::{StudentListQuery, StudentQueryParams},
};
use crate::services::resolve_scope;

pub async fn list_students(
    service: &StudentService,
    request: &HttpRequest,
    (school_id, say_id): ScopePath,
    query: StudentQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = resolve_scope(&storage, &school_id, &say_id).await {
        return Ok(resp);
    }

    let list_query = StudentListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        search: query.search,
        gender: query.gender,
        religion: query.religion,
        classroom_id: query.classroom_id,
        sort: query.sort,
    };

    match storage
        .list_students_with_pagination(&say_id, list_query)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Student list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve student list: {e}"),
            )),
        ),
    }
}
