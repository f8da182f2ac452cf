use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::common::BulkDeleteRequest;
use crate::models::summatives::requests::{
    CreateSummativeRequest, SummativeQueryParams, UpdateSummativeRequest, UpsertScoresRequest,
};
use crate::services::SummativeService;
use crate::utils::{SafeSchoolAcademicYearId, SafeSchoolId, SafeSubjectId, SafeSummativeId};

// 懒加载的全局 SUMMATIVE_SERVICE 实例
static SUMMATIVE_SERVICE: Lazy<SummativeService> = Lazy::new(SummativeService::new_lazy);

// HTTP处理程序
pub async fn list_summatives(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    subject_id: SafeSubjectId,
    query: web::Query<SummativeQueryParams>,
) -> ActixResult<HttpResponse> {
    SUMMATIVE_SERVICE
        .list_summatives(
            &req,
            (school_id.0, say_id.0, subject_id.0),
            query.into_inner(),
        )
        .await
}

pub async fn create_summative(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    subject_id: SafeSubjectId,
    summative_data: web::Json<CreateSummativeRequest>,
) -> ActixResult<HttpResponse> {
    SUMMATIVE_SERVICE
        .create_summative(
            &req,
            (school_id.0, say_id.0, subject_id.0),
            summative_data.into_inner(),
        )
        .await
}

pub async fn get_summative(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    subject_id: SafeSubjectId,
    summative_id: SafeSummativeId,
) -> ActixResult<HttpResponse> {
    SUMMATIVE_SERVICE
        .get_summative(
            &req,
            (school_id.0, say_id.0, subject_id.0),
            summative_id.0,
        )
        .await
}

pub async fn update_summative(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    subject_id: SafeSubjectId,
    summative_id: SafeSummativeId,
    update_data: web::Json<UpdateSummativeRequest>,
) -> ActixResult<HttpResponse> {
    SUMMATIVE_SERVICE
        .update_summative(
            &req,
            (school_id.0, say_id.0, subject_id.0),
            summative_id.0,
            update_data.into_inner(),
        )
        .await
}

pub async fn delete_summative(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    subject_id: SafeSubjectId,
    summative_id: SafeSummativeId,
) -> ActixResult<HttpResponse> {
    SUMMATIVE_SERVICE
        .delete_summative(
            &req,
            (school_id.0, say_id.0, subject_id.0),
            summative_id.0,
        )
        .await
}

pub async fn bulk_delete_summatives(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    subject_id: SafeSubjectId,
    delete_data: web::Json<BulkDeleteRequest>,
) -> ActixResult<HttpResponse> {
    SUMMATIVE_SERVICE
        .bulk_delete_summatives(
            &req,
            (school_id.0, say_id.0, subject_id.0),
            delete_data.into_inner(),
        )
        .await
}

pub async fn upsert_scores(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    subject_id: SafeSubjectId,
    summative_id: SafeSummativeId,
    scores_data: web::Json<UpsertScoresRequest>,
) -> ActixResult<HttpResponse> {
    SUMMATIVE_SERVICE
        .upsert_scores(
            &req,
            (school_id.0, say_id.0, subject_id.0),
            summative_id.0,
            scores_data.into_inner(),
        )
        .await
}

pub async fn list_scores(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    subject_id: SafeSubjectId,
    summative_id: SafeSummativeId,
) -> ActixResult<HttpResponse> {
    SUMMATIVE_SERVICE
        .list_scores(
            &req,
            (school_id.0, say_id.0, subject_id.0),
            summative_id.0,
        )
        .await
}

// 配置路由
pub fn configure_summative_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(
            "/api/v1/schools/{school_id}/academic-years/{say_id}/subjects/{subject_id}/summatives",
        )
        .service(
            web::resource("")
                .route(web::get().to(list_summatives))
                .route(web::post().to(create_summative)),
        )
        // 字面量路径先于 {summative_id} 注册
        .service(web::resource("/bulk-delete").route(web::post().to(bulk_delete_summatives)))
        .service(
            web::resource("/{summative_id}")
                .route(web::get().to(get_summative))
                .route(web::put().to(update_summative))
                .route(web::delete().to(delete_summative)),
        )
        .service(
            web::resource("/{summative_id}/scores")
                .route(web::get().to(list_scores))
                .route(web::put().to(upsert_scores)),
        ),
    );
}
