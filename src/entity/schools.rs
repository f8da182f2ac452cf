//! 学校实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "schools")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub npsn: String,
    pub name: String,
    pub level: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub headmaster_name: Option<String>,
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
    pub fn into_school(self) -> crate::models::schools::entities::School {
        use crate::models::schools::entities::School;
        use chrono::{DateTime, Utc};

        School {
            id: self.id,
            npsn: self.npsn,
            name: self.name,
            level: self.level,
            address: self.address,
            phone: self.phone,
            email: self.email,
            headmaster_name: self.headmaster_name,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
