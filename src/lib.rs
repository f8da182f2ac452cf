//! SIAKAD - 学籍与成绩管理平台后端服务
//!
//! 基于 Actix Web 构建的学校学年档案管理系统后端。
//!
//! # 架构
//! - `cache`: 缓存层（Moka/Redis）
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `query`: 请求驱动的筛选/排序/分页管道
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod cache;
pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod query;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
