use super::entities::AcademicYear;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 学年列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/academic_year.ts")]
pub struct AcademicYearListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<AcademicYear>,
}
