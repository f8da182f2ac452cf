use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::common::BulkDeleteRequest;
use crate::models::students::requests::{
    CreateStudentRequest, StudentExportParams, StudentQueryParams, UpdateStudentRequest,
};
use crate::services::StudentService;
use crate::utils::{SafeSchoolAcademicYearId, SafeSchoolId, SafeStudentId};

// 懒加载的全局 STUDENT_SERVICE 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

// HTTP处理程序
pub async fn list_students(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    query: web::Query<StudentQueryParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .list_students(&req, (school_id.0, say_id.0), query.into_inner())
        .await
}

pub async fn create_student(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    student_data: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .create_student(&req, (school_id.0, say_id.0), student_data.into_inner())
        .await
}

pub async fn get_student(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    student_id: SafeStudentId,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .get_student(&req, (school_id.0, say_id.0), student_id.0)
        .await
}

pub async fn update_student(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    student_id: SafeStudentId,
    update_data: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student(
            &req,
            (school_id.0, say_id.0),
            student_id.0,
            update_data.into_inner(),
        )
        .await
}

pub async fn delete_student(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    student_id: SafeStudentId,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .delete_student(&req, (school_id.0, say_id.0), student_id.0)
        .await
}

pub async fn bulk_delete_students(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    delete_data: web::Json<BulkDeleteRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .bulk_delete_students(&req, (school_id.0, say_id.0), delete_data.into_inner())
        .await
}

pub async fn export_students(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    params: web::Query<StudentExportParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .export_students(&req, (school_id.0, say_id.0), params.into_inner())
        .await
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/schools/{school_id}/academic-years/{say_id}/students")
            .service(
                web::resource("")
                    .route(web::get().to(list_students))
                    .route(web::post().to(create_student)),
            )
            // 字面量路径先于 {student_id} 注册
            .service(web::resource("/bulk-delete").route(web::post().to(bulk_delete_students)))
            .service(web::resource("/export").route(web::get().to(export_students)))
            .service(
                web::resource("/{student_id}")
                    .route(web::get().to(get_student))
                    .route(web::put().to(update_student))
                    .route(web::delete().to(delete_student)),
            ),
    );
}
