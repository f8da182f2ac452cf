use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 班级查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct ClassroomQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub grade_level: Option<i32>,
    pub sort: Option<String>,
}

// 创建班级请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct CreateClassroomRequest {
    pub name: String,
    pub grade_level: i32,
    pub homeroom_teacher_id: Option<String>,
}

// 更新班级请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct UpdateClassroomRequest {
    pub name: Option<String>,
    pub grade_level: Option<i32>,
    pub homeroom_teacher_id: Option<String>,
}

// 分配学生进班请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct AssignStudentsRequest {
    pub student_ids: Vec<String>,
}

// 班级列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct ClassroomListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub grade_level: Option<i32>,
    pub sort: Option<String>,
}

impl ClassroomListQuery {
    // 收集筛选键值对，交给筛选管道按键分发
    pub fn filter_map(&self) -> Vec<(String, String)> {
        let mut filters = Vec::new();
        if let Some(ref search) = self.search {
            filters.push(("search".to_string(), search.clone()));
        }
        if let Some(grade_level) = self.grade_level {
            filters.push(("grade_level".to_string(), grade_level.to_string()));
        }
        filters
    }
}
