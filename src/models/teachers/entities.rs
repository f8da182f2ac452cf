use crate::models::common::Gender;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct Teacher {
    // 教师ID
    pub id: String,
    // 所属学校学年
    pub school_academic_year_id: String,
    // 教职工编号
    pub niy: String,
    // 姓名
    pub name: String,
    // 性别
    pub gender: Gender,
    // 电话
    pub phone: Option<String>,
    // 邮箱
    pub email: Option<String>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
