use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/summative.ts")]
pub struct Summative {
    // 评价ID
    pub id: String,
    // 所属科目
    pub subject_id: String,
    // 评价名称，如 "第一次月考"
    pub title: String,
    // 说明
    pub description: Option<String>,
    // 评价日期（ISO 格式 "YYYY-MM-DD"）
    pub assessed_at: Option<String>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/summative.ts")]
pub struct StudentSummative {
    // 成绩记录ID
    pub id: String,
    // 评价ID
    pub summative_id: String,
    // 学生ID
    pub student_id: String,
    // 分数
    pub score: f64,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
