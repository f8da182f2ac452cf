//! 学生总结性评价成绩实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_summatives")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub summative_id: String,
    pub student_id: String,
    pub score: f64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::summatives::Entity",
        from = "Column::SummativeId",
        to = "super::summatives::Column::Id"
    )]
    Summative,
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
}

impl Related<super::summatives::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Summative.def()
    }
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_student_summative(self) -> crate::models::summatives::entities::StudentSummative {
        use crate::models::summatives::entities::StudentSummative;
        use chrono::{DateTime, Utc};

        StudentSummative {
            id: self.id,
            summative_id: self.summative_id,
            student_id: self.student_id,
            score: self.score,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
