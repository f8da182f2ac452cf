use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ClassroomService, ScopePath};
use crate::models::{
    ApiResponse, ErrorCode,
    classrooms::requests::{ClassroomListQuery, ClassroomQueryParams},
};
use crate::services::resolve_scope;

pub async fn list_classrooms(
    service: &ClassroomService,
    request: &HttpRequest,
    (school_id, say_id): ScopePath,
    query: ClassroomQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = resolve_scope(&storage, &school_id, &say_id).await {
        return Ok(resp);
    }

    let list_query = ClassroomListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        search: query.search,
        grade_level: query.grade_level,
        sort: query.sort,
    };

    match storage
        .list_classrooms_with_pagination(&say_id, list_query)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Classroom list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve classroom list: {e}"),
            )),
        ),
    }
}
