use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{SubjectScopePath, SummativeService, resolve_subject_scope};
use crate::models::summatives::requests::CreateSummativeRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_summative(
    service: &SummativeService,
    request: &HttpRequest,
    (school_id, say_id, subject_id): SubjectScopePath,
    summative_data: CreateSummativeRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = resolve_subject_scope(&storage, &school_id, &say_id, &subject_id).await {
        return Ok(resp);
    }

    if summative_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Summative title must not be empty",
        )));
    }

    match storage.create_summative(&subject_id, summative_data).await {
        Ok(summative) => {
            info!(
                "Summative {} created for subject {}",
                summative.title, subject_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                summative,
                "Summative created successfully",
            )))
        }
        Err(e) => {
            let msg = format!("Summative creation failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}
