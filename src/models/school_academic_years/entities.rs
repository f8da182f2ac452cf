use crate::models::academic_years::entities::AcademicYear;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/school_academic_year.ts")]
pub struct SchoolAcademicYear {
    // 学校学年ID
    pub id: String,
    // 学校ID
    pub school_id: String,
    // 学年ID
    pub academic_year_id: String,
    // 是否为该校当前启用的学年
    pub active: bool,
    // 关联的学年信息（列表查询时填充）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub academic_year: Option<AcademicYear>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
