use crate::models::common::Gender;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct Student {
    // 学生ID
    pub id: String,
    // 所属学校学年
    pub school_academic_year_id: String,
    // 国家学籍号
    pub nisn: String,
    // 姓名
    pub name: String,
    // 性别
    pub gender: Gender,
    // 出生地
    pub birth_place: Option<String>,
    // 出生日期（ISO 格式 "YYYY-MM-DD"）
    pub birth_date: Option<String>,
    // 宗教
    pub religion: Option<String>,
    // 家庭住址
    pub address: Option<String>,
    // 家长信息（详情查询时填充）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<StudentParent>,
    // 监护人信息（详情查询时填充）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardian: Option<StudentGuardian>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 学生家长信息，随学生表单一并提交
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentParent {
    pub father_name: Option<String>,
    pub father_occupation: Option<String>,
    pub mother_name: Option<String>,
    pub mother_occupation: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

// 学生监护人信息，随学生表单一并提交
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentGuardian {
    pub name: String,
    pub occupation: Option<String>,
    pub relationship: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}
