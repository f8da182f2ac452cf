use super::entities::Semester;
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 学年查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/academic_year.ts")]
pub struct AcademicYearQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub semester: Option<String>,
    pub sort: Option<String>,
}

// 创建学年请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/academic_year.ts")]
pub struct CreateAcademicYearRequest {
    pub name: String,
    pub semester: Semester,
}

// 更新学年请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/academic_year.ts")]
pub struct UpdateAcademicYearRequest {
    pub name: Option<String>,
    pub semester: Option<Semester>,
}

// 学年列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/academic_year.ts")]
pub struct AcademicYearListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub semester: Option<String>,
    pub sort: Option<String>,
}

impl AcademicYearListQuery {
    // 收集筛选键值对，交给筛选管道按键分发
    pub fn filter_map(&self) -> Vec<(String, String)> {
        let mut filters = Vec::new();
        if let Some(ref search) = self.search {
            filters.push(("search".to_string(), search.clone()));
        }
        if let Some(ref semester) = self.semester {
            filters.push(("semester".to_string(), semester.clone()));
        }
        filters
    }
}
