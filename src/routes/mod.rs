pub mod academic_years;

pub mod classrooms;

pub mod reports;

pub mod school_academic_years;

pub mod schools;

pub mod students;

pub mod subjects;

pub mod summatives;

pub mod teachers;

pub use academic_years::configure_academic_year_routes;
pub use classrooms::configure_classroom_routes;
pub use reports::configure_report_routes;
pub use school_academic_years::configure_school_academic_year_routes;
pub use schools::configure_school_routes;
pub use students::configure_student_routes;
pub use subjects::configure_subject_routes;
pub use summatives::configure_summative_routes;
pub use teachers::configure_teacher_routes;
