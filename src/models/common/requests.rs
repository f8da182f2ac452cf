use serde::Deserialize;
use ts_rs::TS;

// 批量删除请求，所有资源共用
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/common.ts")]
pub struct BulkDeleteRequest {
    pub ids: Vec<String>,
}
