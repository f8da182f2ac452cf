use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::create::check_homeroom_teacher;
use super::{ClassroomService, ScopePath};
use crate::models::classrooms::requests::UpdateClassroomRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::resolve_scope;

pub async fn update_classroom(
    service: &ClassroomService,
    request: &HttpRequest,
    (school_id, say_id): ScopePath,
    classroom_id: String,
    update_data: UpdateClassroomRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = resolve_scope(&storage, &school_id, &say_id).await {
        return Ok(resp);
    }

    if let Err(resp) =
        check_homeroom_teacher(&storage, &say_id, update_data.homeroom_teacher_id.as_deref()).await
    {
        return Ok(resp);
    }

    match storage
        .update_classroom(&say_id, &classroom_id, update_data)
        .await
    {
        Ok(Some(classroom)) => {
            info!("Classroom {} updated", classroom.name);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                classroom,
                "Classroom updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassroomNotFound,
            "Classroom not found",
        ))),
        Err(e) => {
            let msg = format!("Classroom update failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::ClassroomAlreadyExists,
                    "A classroom with this name already exists in this academic year",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
