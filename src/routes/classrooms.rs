use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::classrooms::requests::{
    AssignStudentsRequest, ClassroomQueryParams, CreateClassroomRequest, UpdateClassroomRequest,
};
use crate::models::common::BulkDeleteRequest;
use crate::models::students::requests::StudentQueryParams;
use crate::services::ClassroomService;
use crate::utils::{SafeClassroomId, SafeSchoolAcademicYearId, SafeSchoolId, SafeStudentId};

// 懒加载的全局 CLASSROOM_SERVICE 实例
static CLASSROOM_SERVICE: Lazy<ClassroomService> = Lazy::new(ClassroomService::new_lazy);

// HTTP处理程序
pub async fn list_classrooms(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    query: web::Query<ClassroomQueryParams>,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .list_classrooms(&req, (school_id.0, say_id.0), query.into_inner())
        .await
}

pub async fn create_classroom(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    classroom_data: web::Json<CreateClassroomRequest>,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .create_classroom(&req, (school_id.0, say_id.0), classroom_data.into_inner())
        .await
}

pub async fn get_classroom(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    classroom_id: SafeClassroomId,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .get_classroom(&req, (school_id.0, say_id.0), classroom_id.0)
        .await
}

pub async fn update_classroom(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    classroom_id: SafeClassroomId,
    update_data: web::Json<UpdateClassroomRequest>,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .update_classroom(
            &req,
            (school_id.0, say_id.0),
            classroom_id.0,
            update_data.into_inner(),
        )
        .await
}

pub async fn delete_classroom(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    classroom_id: SafeClassroomId,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .delete_classroom(&req, (school_id.0, say_id.0), classroom_id.0)
        .await
}

pub async fn bulk_delete_classrooms(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    delete_data: web::Json<BulkDeleteRequest>,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .bulk_delete_classrooms(&req, (school_id.0, say_id.0), delete_data.into_inner())
        .await
}

pub async fn assign_students(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    classroom_id: SafeClassroomId,
    assign_data: web::Json<AssignStudentsRequest>,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .assign_students(
            &req,
            (school_id.0, say_id.0),
            classroom_id.0,
            assign_data.into_inner(),
        )
        .await
}

pub async fn list_classroom_students(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    classroom_id: SafeClassroomId,
    query: web::Query<StudentQueryParams>,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .list_classroom_students(
            &req,
            (school_id.0, say_id.0),
            classroom_id.0,
            query.into_inner(),
        )
        .await
}

pub async fn remove_student(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    classroom_id: SafeClassroomId,
    student_id: SafeStudentId,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .remove_student(
            &req,
            (school_id.0, say_id.0),
            classroom_id.0,
            student_id.0,
        )
        .await
}

// 配置路由
pub fn configure_classroom_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/schools/{school_id}/academic-years/{say_id}/classrooms")
            .service(
                web::resource("")
                    .route(web::get().to(list_classrooms))
                    .route(web::post().to(create_classroom)),
            )
            // 字面量路径先于 {classroom_id} 注册
            .service(web::resource("/bulk-delete").route(web::post().to(bulk_delete_classrooms)))
            .service(
                web::resource("/{classroom_id}")
                    .route(web::get().to(get_classroom))
                    .route(web::put().to(update_classroom))
                    .route(web::delete().to(delete_classroom)),
            )
            .service(
                web::resource("/{classroom_id}/students")
                    .route(web::get().to(list_classroom_students))
                    .route(web::post().to(assign_students)),
            )
            .service(
                web::resource("/{classroom_id}/students/{student_id}")
                    .route(web::delete().to(remove_student)),
            ),
    );
}
