use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/school.ts")]
pub struct School {
    // 学校ID
    pub id: String,
    // 国家学校主数据编号
    pub npsn: String,
    // 学校名称
    pub name: String,
    // 办学层次（小学/初中/高中）
    pub level: String,
    // 地址
    pub address: Option<String>,
    // 电话
    pub phone: Option<String>,
    // 邮箱
    pub email: Option<String>,
    // 校长姓名
    pub headmaster_name: Option<String>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
