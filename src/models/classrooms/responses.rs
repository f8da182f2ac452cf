use super::entities::Classroom;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 班级列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct ClassroomListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Classroom>,
}
