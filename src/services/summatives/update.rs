use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{SubjectScopePath, SummativeService, resolve_subject_scope};
use crate::models::summatives::requests::UpdateSummativeRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_summative(
    service: &SummativeService,
    request: &HttpRequest,
    (school_id, say_id, subject_id): SubjectScopePath,
    summative_id: String,
    update_data: UpdateSummativeRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = resolve_subject_scope(&storage, &school_id, &say_id, &subject_id).await {
        return Ok(resp);
    }

    if let Some(ref title) = update_data.title
        && title.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Summative title must not be empty",
        )));
    }

    match storage
        .update_summative(&subject_id, &summative_id, update_data)
        .await
    {
        Ok(Some(summative)) => {
            info!("Summative {} updated", summative.title);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                summative,
                "Summative updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SummativeNotFound,
            "Summative not found",
        ))),
        Err(e) => {
            error!("Failed to update summative: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to update summative: {e}"),
                )),
            )
        }
    }
}
