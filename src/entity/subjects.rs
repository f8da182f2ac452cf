//! 科目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "subjects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub school_academic_year_id: String,
    pub teacher_id: Option<String>,
    pub name: String,
    pub code: Option<String>,
    pub passing_grade: f64,
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
        from = "Column::TeacherId",
        to = "super::teachers::Column::Id"
    )]
    Teacher,
    #[sea_orm(has_many = "super::summatives::Entity")]
    Summatives,
}

impl Related<super::school_academic_years::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SchoolAcademicYear.def()
    }
}

impl Related<super::teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::summatives::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Summatives.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_subject(self) -> crate::models::subjects::entities::Subject {
        use crate::models::subjects::entities::Subject;
        use chrono::{DateTime, Utc};

        Subject {
            id: self.id,
            school_academic_year_id: self.school_academic_year_id,
            teacher_id: self.teacher_id,
            teacher_name: None,
            name: self.name,
            code: self.code,
            passing_grade: self.passing_grade,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
