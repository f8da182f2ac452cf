use super::entities::Summative;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 评价列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/summative.ts")]
pub struct SummativeListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Summative>,
}

// 成绩列表中的一行：学生与其分数
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/summative.ts")]
pub struct StudentScore {
    pub student_id: String,
    pub student_name: String,
    pub nisn: String,
    // 未录入成绩的学生为 None
    pub score: Option<f64>,
}

// 成绩列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/summative.ts")]
pub struct ScoreListResponse {
    pub summative_id: String,
    pub items: Vec<StudentScore>,
}
