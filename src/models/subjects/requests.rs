use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 科目查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct SubjectQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub teacher_id: Option<String>,
    pub sort: Option<String>,
}

// 创建科目请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct CreateSubjectRequest {
    pub name: String,
    pub code: Option<String>,
    pub teacher_id: Option<String>,
    #[serde(default = "default_passing_grade")]
    pub passing_grade: f64,
}

fn default_passing_grade() -> f64 {
    70.0
}

// 更新科目请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct UpdateSubjectRequest {
    pub name: Option<String>,
    pub code: Option<String>,
    pub teacher_id: Option<String>,
    pub passing_grade: Option<f64>,
}

// 科目列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct SubjectListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub teacher_id: Option<String>,
    pub sort: Option<String>,
}

impl SubjectListQuery {
    // 收集筛选键值对，交给筛选管道按键分发
    pub fn filter_map(&self) -> Vec<(String, String)> {
        let mut filters = Vec::new();
        if let Some(ref search) = self.search {
            filters.push(("search".to_string(), search.clone()));
        }
        if let Some(ref teacher_id) = self.teacher_id {
            filters.push(("teacher_id".to_string(), teacher_id.clone()));
        }
        filters
    }
}
