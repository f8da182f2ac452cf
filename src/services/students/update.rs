use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{ScopePath, StudentService};
use crate::models::students::requests::UpdateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::resolve_scope;
use crate::utils::validate::validate_nisn;

pub async fn update_student(
    service: &StudentService,
    request: &HttpRequest,
    (school_id, say_id): ScopePath,
    student_id: String,
    update_data: UpdateStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = resolve_scope(&storage, &school_id, &say_id).await {
        return Ok(resp);
    }

    if let Some(ref nisn) = update_data.nisn
        && let Err(msg) = validate_nisn(nisn)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    match storage.update_student(&say_id, &student_id, update_data).await {
        Ok(Some(student)) => {
            info!("Student {} updated", student.name);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(student, "Student updated successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => {
            let msg = format!("Student update failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::StudentAlreadyExists,
                    "A student with this NISN already exists in this academic year",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
