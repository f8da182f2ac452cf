//! 学校存储操作

use super::SeaOrmStorage;
use crate::entity::prelude::Schools;
use crate::entity::schools::{ActiveModel, Column};
use crate::errors::{Result, SiakadError};
use crate::models::{
    PaginationInfo,
    schools::{
        entities::School,
        requests::{CreateSchoolRequest, SchoolListQuery, UpdateSchoolRequest},
        responses::SchoolListResponse,
    },
};
use crate::query::{FilterRegistry, SortRegistry, normalize_pagination};
use crate::utils::{escape_like_pattern, generate_id};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

impl SeaOrmStorage {
    // 学校资源的筛选分发表
    fn school_filters() -> FilterRegistry<Schools> {
        FilterRegistry::new()
            .register("search", |select, value| {
                let escaped = escape_like_pattern(value);
                select.filter(
                    Condition::any()
                        .add(Column::Name.contains(&escaped))
                        .add(Column::Npsn.contains(&escaped)),
                )
            })
            .register("level", |select, value| {
                select.filter(Column::Level.eq(value))
            })
    }

    // 学校资源的排序键
    fn school_sorts() -> SortRegistry<Schools> {
        SortRegistry::new()
            .column("name", Column::Name)
            .column("npsn", Column::Npsn)
            .column("level", Column::Level)
            .column("created_at", Column::CreatedAt)
    }

    /// 创建学校
    pub async fn create_school_impl(&self, req: CreateSchoolRequest) -> Result<School> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(generate_id()),
            npsn: Set(req.npsn),
            name: Set(req.name),
            level: Set(req.level),
            address: Set(req.address),
            phone: Set(req.phone),
            email: Set(req.email),
            headmaster_name: Set(req.headmaster_name),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("创建学校失败: {e}")))?;

        Ok(result.into_school())
    }

    /// 通过 ID 获取学校
    pub async fn get_school_by_id_impl(&self, id: &str) -> Result<Option<School>> {
        let result = Schools::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询学校失败: {e}")))?;

        Ok(result.map(|m| m.into_school()))
    }

    /// 分页列出学校
    pub async fn list_schools_with_pagination_impl(
        &self,
        query: SchoolListQuery,
    ) -> Result<SchoolListResponse> {
        let (page, size) = normalize_pagination(query.page, query.size);

        let mut select = Schools::find();

        // 筛选与排序走查询管道
        select = Self::school_filters().apply(select, &query.filter_map());
        select = Self::school_sorts().apply(select, query.sort.as_deref());

        // 默认排序兼平局裁决
        select = select
            .order_by_desc(Column::CreatedAt)
            .order_by_asc(Column::Id);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询学校总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询学校页数失败: {e}")))?;

        let schools = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询学校列表失败: {e}")))?;

        Ok(SchoolListResponse {
            items: schools.into_iter().map(|m| m.into_school()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新学校信息
    pub async fn update_school_impl(
        &self,
        id: &str,
        update: UpdateSchoolRequest,
    ) -> Result<Option<School>> {
        // 先检查学校是否存在
        let existing = self.get_school_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id.to_string()),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(npsn) = update.npsn {
            model.npsn = Set(npsn);
        }

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(level) = update.level {
            model.level = Set(level);
        }

        if let Some(address) = update.address {
            model.address = Set(Some(address));
        }

        if let Some(phone) = update.phone {
            model.phone = Set(Some(phone));
        }

        if let Some(email) = update.email {
            model.email = Set(Some(email));
        }

        if let Some(headmaster_name) = update.headmaster_name {
            model.headmaster_name = Set(Some(headmaster_name));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("更新学校失败: {e}")))?;

        self.get_school_by_id_impl(id).await
    }

    /// 删除学校
    pub async fn delete_school_impl(&self, id: &str) -> Result<bool> {
        let result = Schools::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("删除学校失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 批量删除学校
    pub async fn bulk_delete_schools_impl(&self, ids: &[String]) -> Result<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = Schools::delete_many()
            .filter(Column::Id.is_in(ids.iter().cloned()))
            .exec(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("批量删除学校失败: {e}")))?;

        Ok(result.rows_affected)
    }

    /// 统计学校数量
    pub async fn count_schools_impl(&self) -> Result<u64> {
        Schools::find()
            .count(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("统计学校数量失败: {e}")))
    }
}
