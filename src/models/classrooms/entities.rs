use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct Classroom {
    // 班级ID
    pub id: String,
    // 所属学校学年
    pub school_academic_year_id: String,
    // 班级名称，如 "VII-A"
    pub name: String,
    // 年级
    pub grade_level: i32,
    // 班主任ID
    pub homeroom_teacher_id: Option<String>,
    // 班主任姓名（列表查询时填充）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homeroom_teacher_name: Option<String>,
    // 班级人数（列表查询时填充）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_count: Option<i64>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
