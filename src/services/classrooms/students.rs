//! 班级成员管理

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{ClassroomService, ScopePath};
use crate::models::classrooms::requests::AssignStudentsRequest;
use crate::models::students::requests::{StudentListQuery, StudentQueryParams};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::resolve_scope;

pub async fn assign_students(
    service: &ClassroomService,
    request: &HttpRequest,
    (school_id, say_id): ScopePath,
    classroom_id: String,
    assign_data: AssignStudentsRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = resolve_scope(&storage, &school_id, &say_id).await {
        return Ok(resp);
    }

    if assign_data.student_ids.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "No student ids provided",
        )));
    }

    // 班级必须属于该作用域
    match storage.get_classroom(&say_id, &classroom_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassroomNotFound,
                "Classroom not found",
            )));
        }
        Err(e) => {
            error!("Failed to get classroom by id: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching classroom",
                )),
            );
        }
    }

    match storage
        .assign_students_to_classroom(&say_id, &classroom_id, &assign_data.student_ids)
        .await
    {
        Ok(assigned) => {
            info!(
                "Assigned {} student(s) to classroom {}",
                assigned, classroom_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                assigned,
                "Students assigned successfully",
            )))
        }
        Err(e) => {
            error!("Failed to assign students: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to assign students: {e}"),
                )),
            )
        }
    }
}

pub async fn remove_student(
    service: &ClassroomService,
    request: &HttpRequest,
    (school_id, say_id): ScopePath,
    classroom_id: String,
    student_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = resolve_scope(&storage, &school_id, &say_id).await {
        return Ok(resp);
    }

    match storage
        .remove_student_from_classroom(&classroom_id, &student_id)
        .await
    {
        Ok(true) => {
            info!(
                "Student {} removed from classroom {}",
                student_id, classroom_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Student removed from classroom successfully",
            )))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student is not a member of this classroom",
        ))),
        Err(e) => {
            error!("Failed to remove student from classroom: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to remove student from classroom: {e}"),
                )),
            )
        }
    }
}

pub async fn list_classroom_students(
    service: &ClassroomService,
    request: &HttpRequest,
    (school_id, say_id): ScopePath,
    classroom_id: String,
    query: StudentQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = resolve_scope(&storage, &school_id, &say_id).await {
        return Ok(resp);
    }

    // 班级必须属于该作用域
    match storage.get_classroom(&say_id, &classroom_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassroomNotFound,
                "Classroom not found",
            )));
        }
        Err(e) => {
            error!("Failed to get classroom by id: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching classroom",
                )),
            );
        }
    }

    let list_query = StudentListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        search: query.search,
        gender: query.gender,
        religion: query.religion,
        classroom_id: None,
        sort: query.sort,
    };

    match storage
        .list_classroom_students_with_pagination(&classroom_id, list_query)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Classroom student list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve classroom student list: {e}"),
            )),
        ),
    }
}
