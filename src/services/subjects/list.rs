use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ScopePath, SubjectService};
use crate::models::{
    ApiResponse, ErrorCode,
    subjects::requests::{SubjectListQuery, SubjectQueryParams},
};
use crate::services::resolve_scope;

pub async fn list_subjects(
    service: &SubjectService,
    request: &HttpRequest,
    (school_id, say_id): ScopePath,
    query: SubjectQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = resolve_scope(&storage, &school_id, &say_id).await {
        return Ok(resp);
    }

    let list_query = SubjectListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        search: query.search,
        teacher_id: query.teacher_id,
        sort: query.sort,
    };

    match storage
        .list_subjects_with_pagination(&say_id, list_query)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Subject list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve subject list: {e}"),
            )),
        ),
    }
}
