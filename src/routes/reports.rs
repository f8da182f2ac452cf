use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::ReportService;
use crate::utils::{SafeClassroomId, SafeSchoolAcademicYearId, SafeSchoolId, SafeStudentId};

// 懒加载的全局 REPORT_SERVICE 实例
static REPORT_SERVICE: Lazy<ReportService> = Lazy::new(ReportService::new_lazy);

// HTTP处理程序
pub async fn student_report_card(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    student_id: SafeStudentId,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .student_report_card(&req, (school_id.0, say_id.0), student_id.0)
        .await
}

pub async fn classroom_recap(
    req: HttpRequest,
    school_id: SafeSchoolId,
    say_id: SafeSchoolAcademicYearId,
    classroom_id: SafeClassroomId,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .classroom_recap(&req, (school_id.0, say_id.0), classroom_id.0)
        .await
}

// 配置路由
pub fn configure_report_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(
            "/api/v1/schools/{school_id}/academic-years/{say_id}/students/{student_id}/report",
        )
        .route(web::get().to(student_report_card)),
    )
    .service(
        web::resource(
            "/api/v1/schools/{school_id}/academic-years/{say_id}/classrooms/{classroom_id}/recap",
        )
        .route(web::get().to(classroom_recap)),
    );
}
