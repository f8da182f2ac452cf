use crate::models::common::{Gender, PaginationQuery};
use serde::Deserialize;
use ts_rs::TS;

// 教师查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub gender: Option<String>,
    pub sort: Option<String>,
}

// 创建教师请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct CreateTeacherRequest {
    pub niy: String,
    pub name: String,
    pub gender: Gender,
    pub phone: Option<String>,
    pub email: Option<String>,
}

// 更新教师请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct UpdateTeacherRequest {
    pub niy: Option<String>,
    pub name: Option<String>,
    pub gender: Option<Gender>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

// 教师列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub gender: Option<String>,
    pub sort: Option<String>,
}

impl TeacherListQuery {
    // 收集筛选键值对，交给筛选管道按键分发
    pub fn filter_map(&self) -> Vec<(String, String)> {
        let mut filters = Vec::new();
        if let Some(ref search) = self.search {
            filters.push(("search".to_string(), search.clone()));
        }
        if let Some(ref gender) = self.gender {
            filters.push(("gender".to_string(), gender.clone()));
        }
        filters
    }
}
