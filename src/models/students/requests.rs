use super::entities::{StudentGuardian, StudentParent};
use crate::models::common::{Gender, PaginationQuery};
use serde::Deserialize;
use ts_rs::TS;

// 学生查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub gender: Option<String>,
    pub religion: Option<String>,
    pub classroom_id: Option<String>,
    pub sort: Option<String>,
}

// 创建学生请求
//
// 家长与监护人信息随学生表单一并提交，分别写入各自的关联表。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    pub nisn: String,
    pub name: String,
    pub gender: Gender,
    pub birth_place: Option<String>,
    pub birth_date: Option<String>,
    pub religion: Option<String>,
    pub address: Option<String>,
    pub parent: Option<StudentParent>,
    pub guardian: Option<StudentGuardian>,
}

// 更新学生请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentRequest {
    pub nisn: Option<String>,
    pub name: Option<String>,
    pub gender: Option<Gender>,
    pub birth_place: Option<String>,
    pub birth_date: Option<String>,
    pub religion: Option<String>,
    pub address: Option<String>,
    pub parent: Option<StudentParent>,
    pub guardian: Option<StudentGuardian>,
}

// 学生列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub gender: Option<String>,
    pub religion: Option<String>,
    pub classroom_id: Option<String>,
    pub sort: Option<String>,
}

impl StudentListQuery {
    // 收集筛选键值对，交给筛选管道按键分发
    pub fn filter_map(&self) -> Vec<(String, String)> {
        let mut filters = Vec::new();
        if let Some(ref search) = self.search {
            filters.push(("search".to_string(), search.clone()));
        }
        if let Some(ref gender) = self.gender {
            filters.push(("gender".to_string(), gender.clone()));
        }
        if let Some(ref religion) = self.religion {
            filters.push(("religion".to_string(), religion.clone()));
        }
        if let Some(ref classroom_id) = self.classroom_id {
            filters.push(("classroom_id".to_string(), classroom_id.clone()));
        }
        filters
    }
}

// 学生导出参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentExportParams {
    #[serde(default = "default_export_format")]
    pub format: String,
    pub search: Option<String>,
    pub gender: Option<String>,
    pub classroom_id: Option<String>,
}

fn default_export_format() -> String {
    "csv".to_string()
}
