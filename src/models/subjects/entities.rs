use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct Subject {
    // 科目ID
    pub id: String,
    // 所属学校学年
    pub school_academic_year_id: String,
    // 任课教师ID
    pub teacher_id: Option<String>,
    // 任课教师姓名（列表查询时填充）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,
    // 科目名称
    pub name: String,
    // 科目代码
    pub code: Option<String>,
    // 及格线（KKM）
    pub passing_grade: f64,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
