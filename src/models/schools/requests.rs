use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 学校查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/school.ts")]
pub struct SchoolQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub level: Option<String>,
    pub sort: Option<String>,
}

// 创建学校请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/school.ts")]
pub struct CreateSchoolRequest {
    pub npsn: String,
    pub name: String,
    pub level: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub headmaster_name: Option<String>,
}

// 更新学校请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/school.ts")]
pub struct UpdateSchoolRequest {
    pub npsn: Option<String>,
    pub name: Option<String>,
    pub level: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub headmaster_name: Option<String>,
}

// 学校列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/school.ts")]
pub struct SchoolListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub level: Option<String>,
    pub sort: Option<String>,
}

impl SchoolListQuery {
    // 收集筛选键值对，交给筛选管道按键分发
    pub fn filter_map(&self) -> Vec<(String, String)> {
        let mut filters = Vec::new();
        if let Some(ref search) = self.search {
            filters.push(("search".to_string(), search.clone()));
        }
        if let Some(ref level) = self.level {
            filters.push(("level".to_string(), level.clone()));
        }
        filters
    }
}
