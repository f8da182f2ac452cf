use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{ClassroomService, ScopePath};
use crate::models::classrooms::requests::CreateClassroomRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::resolve_scope;
use crate::storage::Storage;

pub async fn create_classroom(
    service: &ClassroomService,
    request: &HttpRequest,
    (school_id, say_id): ScopePath,
    classroom_data: CreateClassroomRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = resolve_scope(&storage, &school_id, &say_id).await {
        return Ok(resp);
    }

    // 班主任必须属于同一学校学年
    if let Err(resp) =
        check_homeroom_teacher(&storage, &say_id, classroom_data.homeroom_teacher_id.as_deref())
            .await
    {
        return Ok(resp);
    }

    match storage.create_classroom(&say_id, classroom_data).await {
        Ok(classroom) => {
            info!("Classroom {} created in scope {}", classroom.name, say_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                classroom,
                "Classroom created successfully",
            )))
        }
        Err(e) => {
            let msg = format!("Classroom creation failed: {e}");
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

/// 班主任归属校验辅助函数
pub(crate) async fn check_homeroom_teacher(
    storage: &Arc<dyn Storage>,
    say_id: &str,
    homeroom_teacher_id: Option<&str>,
) -> Result<(), HttpResponse> {
    let Some(teacher_id) = homeroom_teacher_id else {
        return Ok(());
    };

    match storage.get_teacher(say_id, teacher_id).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::TeacherNotFound,
            "Homeroom teacher does not belong to this academic year",
        ))),
        Err(e) => {
            error!("Failed to get homeroom teacher: {}", e);
            Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching homeroom teacher",
                )),
            )
        }
    }
}
