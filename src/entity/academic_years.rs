//! 学年实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "academic_years")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub semester: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::school_academic_years::Entity")]
    SchoolAcademicYears,
}

impl Related<super::school_academic_years::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SchoolAcademicYears.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_academic_year(self) -> crate::models::academic_years::entities::AcademicYear {
        use crate::models::academic_years::entities::{AcademicYear, Semester};
        use chrono::{DateTime, Utc};

        AcademicYear {
            id: self.id,
            name: self.name,
            semester: self.semester.parse::<Semester>().unwrap_or(Semester::Odd),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
