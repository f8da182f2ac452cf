//! 成绩录入与查询

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{SubjectScopePath, SummativeService, resolve_subject_scope};
use crate::models::summatives::requests::UpsertScoresRequest;
use crate::models::summatives::responses::ScoreListResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_score;

pub async fn upsert_scores(
    service: &SummativeService,
    request: &HttpRequest,
    (school_id, say_id, subject_id): SubjectScopePath,
    summative_id: String,
    scores_data: UpsertScoresRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = resolve_subject_scope(&storage, &school_id, &say_id, &subject_id).await {
        return Ok(resp);
    }

    // 评价必须属于该科目
    match storage.get_summative(&subject_id, &summative_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SummativeNotFound,
                "Summative not found",
            )));
        }
        Err(e) => {
            error!("Failed to get summative by id: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching summative",
                )),
            );
        }
    }

    if scores_data.scores.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "No scores provided",
        )));
    }

    // 分数范围校验，一条不合法整批拒绝
    for entry in &scores_data.scores {
        if validate_score(entry.score).is_err() {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ScoreOutOfRange,
                format!(
                    "Score {} for student {} is out of range (0-100)",
                    entry.score, entry.student_id
                ),
            )));
        }
    }

    // 成绩只能录给作用域内的学生
    for entry in &scores_data.scores {
        match storage.get_student(&say_id, &entry.student_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::StudentNotFound,
                    format!(
                        "Student {} does not belong to this academic year",
                        entry.student_id
                    ),
                )));
            }
            Err(e) => {
                error!("Failed to get student by id: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Internal server error while fetching student",
                    )),
                );
            }
        }
    }

    match storage
        .upsert_student_scores(&summative_id, &scores_data.scores)
        .await
    {
        Ok(written) => {
            info!(
                "Upserted {} score(s) for summative {}",
                written, summative_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(written, "Scores saved successfully")))
        }
        Err(e) => {
            error!("Failed to upsert scores: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to save scores: {e}"),
                )),
            )
        }
    }
}

pub async fn list_scores(
    service: &SummativeService,
    request: &HttpRequest,
    (school_id, say_id, subject_id): SubjectScopePath,
    summative_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = resolve_subject_scope(&storage, &school_id, &say_id, &subject_id).await {
        return Ok(resp);
    }

    match storage.get_summative(&subject_id, &summative_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SummativeNotFound,
                "Summative not found",
            )));
        }
        Err(e) => {
            error!("Failed to get summative by id: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching summative",
                )),
            );
        }
    }

    match storage.list_summative_scores(&say_id, &summative_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ScoreListResponse {
                summative_id,
                items,
            },
            "Score list retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to list summative scores: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve score list: {e}"),
                )),
            )
        }
    }
}
