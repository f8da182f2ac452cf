//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod academic_years;
pub mod classroom_students;
pub mod classrooms;
pub mod school_academic_years;
pub mod schools;
pub mod student_guardians;
pub mod student_parents;
pub mod student_summatives;
pub mod students;
pub mod subjects;
pub mod summatives;
pub mod teachers;
