use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 学校学年查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/school_academic_year.ts")]
pub struct SchoolAcademicYearQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub active: Option<bool>,
}

// 为学校挂接学年请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/school_academic_year.ts")]
pub struct AttachAcademicYearRequest {
    pub academic_year_id: String,
    #[serde(default)]
    pub active: bool,
}

// 学校学年列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/school_academic_year.ts")]
pub struct SchoolAcademicYearListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub active: Option<bool>,
}
