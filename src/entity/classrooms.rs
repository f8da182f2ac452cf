//! 班级实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "classrooms")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub school_academic_year_id: String,
    pub name: String,
    pub grade_level: i32,
    pub homeroom_teacher_id: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::school_academic_years::Entity",
        from = "Column::SchoolAcademicYearId",
        to = "super::school_academic_years::Column::Id"
    )]
    SchoolAcademicYear,
    #[sea_orm(
        belongs_to = "super::teachers::Entity",
        from = "Column::HomeroomTeacherId",
        to = "super::teachers::Column::Id"
    )]
    HomeroomTeacher,
    #[sea_orm(has_many = "super::classroom_students::Entity")]
    ClassroomStudents,
}

impl Related<super::school_academic_years::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SchoolAcademicYear.def()
    }
}

impl Related<super::teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HomeroomTeacher.def()
    }
}

impl Related<super::classroom_students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassroomStudents.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_classroom(self) -> crate::models::classrooms::entities::Classroom {
        use crate::models::classrooms::entities::Classroom;
        use chrono::{DateTime, Utc};

        Classroom {
            id: self.id,
            school_academic_year_id: self.school_academic_year_id,
            name: self.name,
            grade_level: self.grade_level,
            homeroom_teacher_id: self.homeroom_teacher_id,
            homeroom_teacher_name: None,
            student_count: None,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
