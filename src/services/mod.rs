pub mod academic_years;
pub mod classrooms;
pub mod reports;
pub mod school_academic_years;
pub mod schools;
pub mod students;
pub mod subjects;
pub mod summatives;
pub mod teachers;

pub use academic_years::AcademicYearService;
pub use classrooms::ClassroomService;
pub use reports::ReportService;
pub use school_academic_years::SchoolAcademicYearService;
pub use schools::SchoolService;
pub use students::StudentService;
pub use subjects::SubjectService;
pub use summatives::SummativeService;
pub use teachers::TeacherService;

use std::sync::Arc;

use actix_web::HttpResponse;
use tracing::error;

use crate::models::school_academic_years::entities::SchoolAcademicYear;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 作用域校验
///
/// 所有挂在 `/schools/{school_id}/academic-years/{say_id}` 下的资源操作
/// 都先确认学校学年确实属于该学校，不属于则 404。
pub(crate) async fn resolve_scope(
    storage: &Arc<dyn Storage>,
    school_id: &str,
    say_id: &str,
) -> Result<SchoolAcademicYear, HttpResponse> {
    match storage.get_school_academic_year(school_id, say_id).await {
        Ok(Some(say)) => Ok(say),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AcademicYearNotFound,
            "School academic year not found for this school",
        ))),
        Err(e) => {
            error!("Failed to resolve school academic year scope: {}", e);
            Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while resolving scope",
                )),
            )
        }
    }
}
