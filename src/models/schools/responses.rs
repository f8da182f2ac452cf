use super::entities::School;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 学校列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/school.ts")]
pub struct SchoolListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<School>,
}
