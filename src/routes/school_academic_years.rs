use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::school_academic_years::requests::{
    AttachAcademicYearRequest, SchoolAcademicYearQueryParams,
};
use crate::services::SchoolAcademicYearService;
use crate::utils::{SafeSchoolAcademicYearId, SafeSchoolId};

// 懒加载的全局 SCHOOL_ACADEMIC_YEAR_SERVICE 实例
static SCHOOL_ACADEMIC_YEAR_SERVICE: Lazy<SchoolAcademicYearService> =
    Lazy::new(SchoolAcademicYearService::new_lazy);

// HTTP处理程序
pub async fn list_school_academic_years(
    req: HttpRequest,
    school_id: SafeSchoolId,
    query: web::Query<SchoolAcademicYearQueryParams>,
) -> ActixResult<HttpResponse> {
    SCHOOL_ACADEMIC_YEAR_SERVICE
        .list_school_academic_years(&req, school_id.0, query.into_inner())
        .await
}

pub async fn attach_academic_year(
    req: HttpRequest,
    school_id: SafeSchoolId,
    attach_data: web::Json<AttachAcademicYearRequest>,
) -> ActixResult<HttpResponse> {
    SCHOOL_ACADEMIC_YEAR_SERVICE
        .attach_academic_year(&req, school_id.0, attach_data.into_inner())
        .await
}

// 登录下拉框使用的学年选项
pub async fn list_academic_year_options(
    req: HttpRequest,
    school_id: SafeSchoolId,
) -> ActixResult<HttpResponse> {
    SCHOOL_ACADEMIC_YEAR_SERVICE
        .list_academic_year_options(&req, school_id.0)
        .await
}

pub async fn get_school_academic_year(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
) -> ActixResult<HttpResponse> {
    SCHOOL_ACADEMIC_YEAR_SERVICE
        .get_school_academic_year(&req, school_id.0, say_id.0)
        .await
}

pub async fn activate_school_academic_year(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
) -> ActixResult<HttpResponse> {
    SCHOOL_ACADEMIC_YEAR_SERVICE
        .activate_school_academic_year(&req, school_id.0, say_id.0)
        .await
}

pub async fn detach_academic_year(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
) -> ActixResult<HttpResponse> {
    SCHOOL_ACADEMIC_YEAR_SERVICE
        .detach_academic_year(&req, school_id.0, say_id.0)
        .await
}

// 配置路由
pub fn configure_school_academic_year_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/schools/{school_id}/academic-years")
            .service(
                web::resource("")
                    .route(web::get().to(list_school_academic_years))
                    .route(web::post().to(attach_academic_year)),
            )
            // 字面量路径先于 {say_id} 注册
            .service(web::resource("/options").route(web::get().to(list_academic_year_options)))
            .service(
                web::resource("/{say_id}")
                    .route(web::get().to(get_school_academic_year))
                    .route(web::delete().to(detach_academic_year)),
            )
            .service(
                web::resource("/{say_id}/activate")
                    .route(web::put().to(activate_school_academic_year)),
            ),
    );
}
