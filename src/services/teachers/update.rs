use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{ScopePath, TeacherService};
use crate::models::teachers::requests::UpdateTeacherRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::resolve_scope;
use crate::utils::validate::validate_niy;

pub async fn update_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    (school_id, say_id): ScopePath,
    teacher_id: String,
    update_data: UpdateTeacherRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = resolve_scope(&storage, &school_id, &say_id).await {
        return Ok(resp);
    }

    if let Some(ref niy) = update_data.niy
        && let Err(msg) = validate_niy(niy)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    match storage.update_teacher(&say_id, &teacher_id, update_data).await {
        Ok(Some(teacher)) => {
            info!("Teacher {} updated", teacher.name);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(teacher, "Teacher updated successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeacherNotFound,
            "Teacher not found",
        ))),
        Err(e) => {
            let msg = format!("Teacher update failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::TeacherAlreadyExists,
                    "A teacher with this NIY already exists in this academic year",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
