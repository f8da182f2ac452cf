//! 排序注册表
//!
//! 排序请求形如 `name` 或 `-name`，`-` 前缀表示降序。
//! 具名排序处理器优先于普通列排序，未知排序键不改变查询。

use sea_orm::{EntityTrait, QueryOrder, Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// 解析后的排序请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortRequest {
    pub key: String,
    pub direction: SortDirection,
}

impl SortRequest {
    /// 解析排序参数，空白输入返回 None
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        if let Some(key) = raw.strip_prefix('-') {
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            Some(Self {
                key: key.to_string(),
                direction: SortDirection::Desc,
            })
        } else {
            Some(Self {
                key: raw.to_string(),
                direction: SortDirection::Asc,
            })
        }
    }
}

pub type SortFn<E> = Box<dyn Fn(Select<E>, SortDirection) -> Select<E>>;

pub struct SortRegistry<E: EntityTrait> {
    handlers: Vec<(&'static str, SortFn<E>)>,
    columns: Vec<(&'static str, E::Column)>,
}

impl<E: EntityTrait> Default for SortRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntityTrait> SortRegistry<E> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            columns: Vec::new(),
        }
    }

    /// 注册具名排序处理器，优先于同名列排序
    pub fn handler<F>(mut self, key: &'static str, handler: F) -> Self
    where
        F: Fn(Select<E>, SortDirection) -> Select<E> + 'static,
    {
        self.handlers.push((key, Box::new(handler)));
        self
    }

    /// 注册可按普通升/降序排序的列
    pub fn column(mut self, key: &'static str, column: E::Column) -> Self {
        self.columns.push((key, column));
        self
    }

    /// 应用排序请求
    pub fn apply(&self, select: Select<E>, raw: Option<&str>) -> Select<E> {
        let Some(request) = raw.and_then(SortRequest::parse) else {
            return select;
        };

        if let Some((_, handler)) = self.handlers.iter().find(|(k, _)| *k == request.key) {
            return handler(select, request.direction);
        }

        if let Some((_, column)) = self.columns.iter().find(|(k, _)| *k == request.key) {
            return match request.direction {
                SortDirection::Asc => select.order_by_asc(*column),
                SortDirection::Desc => select.order_by_desc(*column),
            };
        }

        // 未知排序键不处理
        select
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::prelude::Schools;
    use crate::entity::schools::Column;
    use sea_orm::{DbBackend, QueryTrait};

    fn registry() -> SortRegistry<Schools> {
        SortRegistry::new()
            .column("name", Column::Name)
            .column("created_at", Column::CreatedAt)
            .handler("npsn", |select, direction| match direction {
                SortDirection::Asc => select.order_by_asc(Column::Npsn),
                SortDirection::Desc => select.order_by_desc(Column::Npsn),
            })
    }

    fn sql(select: Select<Schools>) -> String {
        select.build(DbBackend::Sqlite).to_string()
    }

    #[test]
    fn test_parse_ascending() {
        let request = SortRequest::parse("name").unwrap();
        assert_eq!(request.key, "name");
        assert_eq!(request.direction, SortDirection::Asc);
    }

    #[test]
    fn test_parse_descending() {
        let request = SortRequest::parse("-created_at").unwrap();
        assert_eq!(request.key, "created_at");
        assert_eq!(request.direction, SortDirection::Desc);
    }

    #[test]
    fn test_parse_blank() {
        assert!(SortRequest::parse("").is_none());
        assert!(SortRequest::parse("   ").is_none());
        assert!(SortRequest::parse("-").is_none());
    }

    #[test]
    fn test_column_sort_applied() {
        let result = sql(registry().apply(Schools::find(), Some("-name")));
        assert!(result.contains("ORDER BY"));
        assert!(result.contains("DESC"));
    }

    #[test]
    fn test_handler_takes_precedence() {
        let result = sql(registry().apply(Schools::find(), Some("npsn")));
        assert!(result.contains("ORDER BY"));
        assert!(result.contains("npsn"));
    }

    #[test]
    fn test_unknown_key_leaves_query_untouched() {
        let plain = sql(Schools::find());
        let result = sql(registry().apply(Schools::find(), Some("bogus")));
        assert_eq!(plain, result);
    }

    #[test]
    fn test_no_sort_leaves_query_untouched() {
        let plain = sql(Schools::find());
        let result = sql(registry().apply(Schools::find(), None));
        assert_eq!(plain, result);
    }
}
