use super::entities::Teacher;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 教师列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Teacher>,
}
