use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::common::BulkDeleteRequest;
use crate::models::subjects::requests::{
    CreateSubjectRequest, SubjectQueryParams, UpdateSubjectRequest,
};
use crate::services::SubjectService;
use crate::utils::{SafeSchoolAcademicYearId, SafeSchoolId, SafeSubjectId};

// 懒加载的全局 SUBJECT_SERVICE 实例
static SUBJECT_SERVICE: Lazy<SubjectService> = Lazy::new(SubjectService::new_lazy);

// HTTP处理程序
pub async fn list_subjects(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    query: web::Query<SubjectQueryParams>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .list_subjects(&req, (school_id.0, say_id.0), query.into_inner())
        .await
}

pub async fn create_subject(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    subject_data: web::Json<CreateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .create_subject(&req, (school_id.0, say_id.0), subject_data.into_inner())
        .await
}

pub async fn get_subject(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    subject_id: SafeSubjectId,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .get_subject(&req, (school_id.0, say_id.0), subject_id.0)
        .await
}

pub async fn update_subject(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    subject_id: SafeSubjectId,
    update_data: web::Json<UpdateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .update_subject(
            &req,
            (school_id.0, say_id.0),
            subject_id.0,
            update_data.into_inner(),
        )
        .await
}

pub async fn delete_subject(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    subject_id: SafeSubjectId,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .delete_subject(&req, (school_id.0, say_id.0), subject_id.0)
        .await
}

pub async fn bulk_delete_subjects(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    delete_data: web::Json<BulkDeleteRequest>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .bulk_delete_subjects(&req, (school_id.0, say_id.0), delete_data.into_inner())
        .await
}

// 配置路由
pub fn configure_subject_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/schools/{school_id}/academic-years/{say_id}/subjects")
            .service(
                web::resource("")
                    .route(web::get().to(list_subjects))
                    .route(web::post().to(create_subject)),
            )
            // 字面量路径先于 {subject_id} 注册
            .service(web::resource("/bulk-delete").route(web::post().to(bulk_delete_subjects)))
            .service(
                web::resource("/{subject_id}")
                    .route(web::get().to(get_subject))
                    .route(web::put().to(update_subject))
                    .route(web::delete().to(delete_subject)),
            ),
    );
}
