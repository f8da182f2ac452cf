use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{ScopePath, SubjectService};
use crate::models::subjects::requests::CreateSubjectRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::resolve_scope;
use crate::utils::validate::validate_score;

pub async fn create_subject(
    service: &SubjectService,
    request: &HttpRequest,
    (school_id, say_id): ScopePath,
    subject_data: CreateSubjectRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = resolve_scope(&storage, &school_id, &say_id).await {
        return Ok(resp);
    }

    // 及格线取值与分数同域
    if validate_score(subject_data.passing_grade).is_err() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Passing grade must be between 0 and 100",
        )));
    }

    // 任课教师必须属于同一学校学年
    if let Some(ref teacher_id) = subject_data.teacher_id {
        match storage.get_teacher(&say_id, teacher_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::TeacherNotFound,
                    "Subject teacher does not belong to this academic year",
                )));
            }
            Err(e) => {
                error!("Failed to get subject teacher: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Internal server error while fetching subject teacher",
                    )),
                );
            }
        }
    }

    match storage.create_subject(&say_id, subject_data).await {
        Ok(subject) => {
            info!("Subject {} created in scope {}", subject.name, say_id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(subject, "Subject created successfully")))
        }
        Err(e) => {
            let msg = format!("Subject creation failed: {e}");
            error!("{}", msg);
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::SubjectAlreadyExists,
                    "A subject with this name already exists in this academic year",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
