//! 业务数据模型
//!
//! 按资源划分的 entities / requests / responses 三层结构，
//! `common` 中为跨资源共享的分页、响应与枚举类型。

pub mod common;

pub mod academic_years;
pub mod classrooms;
pub mod school_academic_years;
pub mod schools;
pub mod students;
pub mod subjects;
pub mod summatives;
pub mod teachers;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 应用启动时间（用于运行时信息）
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// API 业务状态码
///
/// 0 表示成功；1xxx 为通用错误；2xxx 起按资源分组。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 1000,
    NotFound = 1001,
    Conflict = 1002,
    ValidationFailed = 1003,
    InternalServerError = 1004,

    SchoolNotFound = 2001,
    SchoolAlreadyExists = 2002,

    AcademicYearNotFound = 3001,
    AcademicYearAlreadyExists = 3002,
    AcademicYearAlreadyAttached = 3003,

    TeacherNotFound = 4001,
    TeacherAlreadyExists = 4002,

    ClassroomNotFound = 5001,
    ClassroomAlreadyExists = 5002,
    StudentAlreadyAssigned = 5003,

    StudentNotFound = 6001,
    StudentAlreadyExists = 6002,

    SubjectNotFound = 7001,
    SubjectAlreadyExists = 7002,

    SummativeNotFound = 8001,
    ScoreOutOfRange = 8002,

    ReportGenerationFailed = 9001,
}
