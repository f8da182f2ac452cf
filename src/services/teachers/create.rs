use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{ScopePath, TeacherService};
use crate::models::teachers::requests::CreateTeacherRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::resolve_scope;
use crate::utils::validate::validate_niy;

pub async fn create_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    (school_id, say_id): ScopePath,
    teacher_data: CreateTeacherRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = resolve_scope(&storage, &school_id, &say_id).await {
        return Ok(resp);
    }

    // NIY 格式校验
    if let Err(msg) = validate_niy(&teacher_data.niy) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    match storage.create_teacher(&say_id, teacher_data).await {
        Ok(teacher) => {
            info!("Teacher {} created in scope {}", teacher.name, say_id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(teacher, "Teacher created successfully")))
        }
        Err(e) => {
            let msg = format!("Teacher creation failed: {e}");
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
