//! 请求驱动的查询管道
//!
//! 将 HTTP 请求中的筛选、排序、分页参数声明式地组合到
//! `sea_orm::Select` 上。各资源在存储层注册自己的筛选器与排序键，
//! 请求中的键按名分发：
//!
//! - 筛选：请求筛选表中的每个键，若已注册同名筛选器则应用，未注册的键忽略
//! - 排序：优先分发到同名的具名排序处理器，否则回退为按列名的升/降序，
//!   `-` 前缀表示降序，未知排序键不改变排序
//! - 分页：页码与页大小做边界收敛后交给 SeaORM 的 Paginator

pub mod filter;
pub mod paginate;
pub mod sort;

pub use filter::FilterRegistry;
pub use paginate::normalize_pagination;
pub use sort::{SortDirection, SortRegistry, SortRequest};
