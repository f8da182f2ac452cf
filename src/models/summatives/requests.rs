use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 评价查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/summative.ts")]
pub struct SummativeQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub sort: Option<String>,
}

// 创建评价请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/summative.ts")]
pub struct CreateSummativeRequest {
    pub title: String,
    pub description: Option<String>,
    pub assessed_at: Option<String>,
}

// 更新评价请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/summative.ts")]
pub struct UpdateSummativeRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub assessed_at: Option<String>,
}

// 评价列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/summative.ts")]
pub struct SummativeListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

impl SummativeListQuery {
    // 收集筛选键值对，交给筛选管道按键分发
    pub fn filter_map(&self) -> Vec<(String, String)> {
        let mut filters = Vec::new();
        if let Some(ref search) = self.search {
            filters.push(("search".to_string(), search.clone()));
        }
        filters
    }
}

// 单个学生的成绩条目
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/summative.ts")]
pub struct ScoreEntry {
    pub student_id: String,
    pub score: f64,
}

// 批量录入/更新成绩请求，按 (评价, 学生) 键 upsert
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/summative.ts")]
pub struct UpsertScoresRequest {
    pub scores: Vec<ScoreEntry>,
}
