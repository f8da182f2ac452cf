pub use super::academic_years::Entity as AcademicYears;
pub use super::classroom_students::Entity as ClassroomStudents;
pub use super::classrooms::Entity as Classrooms;
pub use super::school_academic_years::Entity as SchoolAcademicYears;
pub use super::schools::Entity as Schools;
pub use super::student_guardians::Entity as StudentGuardians;
pub use super::student_parents::Entity as StudentParents;
pub use super::student_summatives::Entity as StudentSummatives;
pub use super::students::Entity as Students;
pub use super::subjects::Entity as Subjects;
pub use super::summatives::Entity as Summatives;
pub use super::teachers::Entity as Teachers;
