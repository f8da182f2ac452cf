//! 学生实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub school_academic_year_id: String,
    pub nisn: String,
    pub name: String,
    pub gender: String,
    pub birth_place: Option<String>,
    pub birth_date: Option<String>,
    pub religion: Option<String>,
    pub address: Option<String>,
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
    #[sea_orm(has_one = "super::student_parents::Entity")]
    StudentParent,
    #[sea_orm(has_one = "super::student_guardians::Entity")]
    StudentGuardian,
    #[sea_orm(has_many = "super::classroom_students::Entity")]
    ClassroomStudents,
    #[sea_orm(has_many = "super::student_summatives::Entity")]
    StudentSummatives,
}

impl Related<super::school_academic_years::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SchoolAcademicYear.def()
    }
}

impl Related<super::student_parents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentParent.def()
    }
}

impl Related<super::student_guardians::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentGuardian.def()
    }
}

impl Related<super::classroom_students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassroomStudents.def()
    }
}

impl Related<super::student_summatives::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentSummatives.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_student(self) -> crate::models::students::entities::Student {
        use crate::models::common::Gender;
        use crate::models::students::entities::Student;
        use chrono::{DateTime, Utc};

        Student {
            id: self.id,
            school_academic_year_id: self.school_academic_year_id,
            nisn: self.nisn,
            name: self.name,
            gender: self.gender.parse::<Gender>().unwrap_or(Gender::Male),
            birth_place: self.birth_place,
            birth_date: self.birth_date,
            religion: self.religion,
            address: self.address,
            parent: None,
            guardian: None,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
