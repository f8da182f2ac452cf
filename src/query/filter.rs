//! 筛选器注册表
//!
//! 每个资源注册 `键 -> 查询修改函数` 的分发表，请求的筛选表按键命中即应用。

use sea_orm::{EntityTrait, Select};

pub type FilterFn<E> = Box<dyn Fn(Select<E>, &str) -> Select<E>>;

pub struct FilterRegistry<E: EntityTrait> {
    appliers: Vec<(&'static str, FilterFn<E>)>,
}

impl<E: EntityTrait> Default for FilterRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntityTrait> FilterRegistry<E> {
    pub fn new() -> Self {
        Self {
            appliers: Vec::new(),
        }
    }

    /// 注册一个筛选器
    pub fn register<F>(mut self, key: &'static str, applier: F) -> Self
    where
        F: Fn(Select<E>, &str) -> Select<E> + 'static,
    {
        self.appliers.push((key, Box::new(applier)));
        self
    }

    /// 按请求的筛选表依次应用已注册的筛选器
    ///
    /// 空白值跳过，未注册的键直接忽略。
    pub fn apply(&self, mut select: Select<E>, filters: &[(String, String)]) -> Select<E> {
        for (key, value) in filters {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            if let Some((_, applier)) = self.appliers.iter().find(|(k, _)| *k == key.as_str()) {
                select = applier(select, value);
            }
        }
        select
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::prelude::Schools;
    use crate::entity::schools::Column;
    use sea_orm::{ColumnTrait, DbBackend, QueryFilter, QueryTrait};

    fn registry() -> FilterRegistry<Schools> {
        FilterRegistry::new()
            .register("search", |select, value| {
                select.filter(Column::Name.contains(value))
            })
            .register("level", |select, value| {
                select.filter(Column::Level.eq(value))
            })
    }

    fn sql(select: Select<Schools>) -> String {
        select.build(DbBackend::Sqlite).to_string()
    }

    #[test]
    fn test_registered_key_applied() {
        let filters = vec![("search".to_string(), "SMP".to_string())];
        let result = sql(registry().apply(Schools::find(), &filters));
        assert!(result.contains("LIKE '%SMP%'"));
    }

    #[test]
    fn test_unknown_key_ignored() {
        let filters = vec![("bogus".to_string(), "value".to_string())];
        let plain = sql(Schools::find());
        let result = sql(registry().apply(Schools::find(), &filters));
        assert_eq!(plain, result);
    }

    #[test]
    fn test_blank_value_skipped() {
        let filters = vec![("search".to_string(), "   ".to_string())];
        let plain = sql(Schools::find());
        let result = sql(registry().apply(Schools::find(), &filters));
        assert_eq!(plain, result);
    }

    #[test]
    fn test_multiple_filters_compose() {
        let filters = vec![
            ("search".to_string(), "Negeri".to_string()),
            ("level".to_string(), "smp".to_string()),
        ];
        let result = sql(registry().apply(Schools::find(), &filters));
        assert!(result.contains("LIKE '%Negeri%'"));
        assert!(result.contains("'smp'"));
    }

    #[test]
    fn test_value_trimmed_before_apply() {
        let filters = vec![("level".to_string(), "  sd  ".to_string())];
        let result = sql(registry().apply(Schools::find(), &filters));
        assert!(result.contains("'sd'"));
    }
}
