use super::entities::SchoolAcademicYear;
use crate::models::common::PaginationInfo;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学校学年列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/school_academic_year.ts")]
pub struct SchoolAcademicYearListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<SchoolAcademicYear>,
}

// 登录下拉框使用的学年选项
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/school_academic_year.ts")]
pub struct AcademicYearOption {
    pub id: String,
    pub label: String,
    pub active: bool,
}
