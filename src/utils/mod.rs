pub mod extractor;
pub mod ids;
pub mod parameter_error_handler;
pub mod sql;
pub mod validate;

pub use extractor::{
    SafeAcademicYearId, SafeClassroomId, SafeSchoolAcademicYearId, SafeSchoolId, SafeStudentId,
    SafeSubjectId, SafeSummativeId, SafeTeacherId,
};
pub use ids::{generate_id, is_valid_id};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use sql::escape_like_pattern;
