use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{SubjectScopePath, SummativeService, resolve_subject_scope};
use crate::models::{
    ApiResponse, ErrorCode,
    summatives::requests::{SummativeListQuery, SummativeQueryParams},
};

pub async fn list_summatives(
    service: &SummativeService,
    request: &HttpRequest,
    (school_id, say_id, subject_id): SubjectScopePath,
    query: SummativeQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = resolve_subject_scope(&storage, &school_id, &say_id, &subject_id).await {
        return Ok(resp);
    }

    let list_query = SummativeListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        search: query.search,
        sort: query.sort,
    };

    match storage
        .list_summatives_with_pagination(&subject_id, list_query)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Summative list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve summative list: {e}"),
            )),
        ),
    }
}
