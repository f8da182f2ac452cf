use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::common::BulkDeleteRequest;
use crate::models::teachers::requests::{
    CreateTeacherRequest, TeacherQueryParams, UpdateTeacherRequest,
};
use crate::services::TeacherService;
use crate::utils::{SafeSchoolAcademicYearId, SafeSchoolId, SafeTeacherId};

// 懒加载的全局 TEACHER_SERVICE 实例
static TEACHER_SERVICE: Lazy<TeacherService> = Lazy::new(TeacherService::new_lazy);

// HTTP处理程序
pub async fn list_teachers(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    query: web::Query<TeacherQueryParams>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .list_teachers(&req, (school_id.0, say_id.0), query.into_inner())
        .await
}

pub async fn create_teacher(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    teacher_data: web::Json<CreateTeacherRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .create_teacher(&req, (school_id.0, say_id.0), teacher_data.into_inner())
        .await
}

pub async fn get_teacher(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    teacher_id: SafeTeacherId,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .get_teacher(&req, (school_id.0, say_id.0), teacher_id.0)
        .await
}

pub async fn update_teacher(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    teacher_id: SafeTeacherId,
    update_data: web::Json<UpdateTeacherRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .update_teacher(
            &req,
            (school_id.0, say_id.0),
            teacher_id.0,
            update_data.into_inner(),
        )
        .await
}

pub async fn delete_teacher(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    teacher_id: SafeTeacherId,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .delete_teacher(&req, (school_id.0, say_id.0), teacher_id.0)
        .await
}

pub async fn bulk_delete_teachers(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    delete_data: web::Json<BulkDeleteRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .bulk_delete_teachers(&req, (school_id.0, say_id.0), delete_data.into_inner())
        .await
}

// 配置路由
pub fn configure_teacher_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/schools/{school_id}/academic-years/{say_id}/teachers")
            .service(
                web::resource("")
                    .route(web::get().to(list_teachers))
                    .route(web::post().to(create_teacher)),
            )
            // 字面量路径先于 {teacher_id} 注册
            .service(web::resource("/bulk-delete").route(web::post().to(bulk_delete_teachers)))
            .service(
                web::resource("/{teacher_id}")
                    .route(web::get().to(get_teacher))
                    .route(web::put().to(update_teacher))
                    .route(web::delete().to(delete_teacher)),
            ),
    );
}
