//! 学年存储操作

use super::SeaOrmStorage;
use crate::entity::academic_years::{ActiveModel, Column};
use crate::entity::prelude::AcademicYears;
use crate::errors::{Result, SiakadError};
use crate::models::{
    PaginationInfo,
    academic_years::{
        entities::AcademicYear,
        requests::{AcademicYearListQuery, CreateAcademicYearRequest, UpdateAcademicYearRequest},
        responses::AcademicYearListResponse,
    },
};
use crate::query::{FilterRegistry, SortRegistry, normalize_pagination};
use crate::utils::{escape_like_pattern, generate_id};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    // 学年资源的筛选分发表
    fn academic_year_filters() -> FilterRegistry<AcademicYears> {
        FilterRegistry::new()
            .register("search", |select, value| {
                let escaped = escape_like_pattern(value);
                select.filter(Column::Name.contains(&escaped))
            })
            .register("semester", |select, value| {
                select.filter(Column::Semester.eq(value))
            })
    }

    // 学年资源的排序键
    fn academic_year_sorts() -> SortRegistry<AcademicYears> {
        SortRegistry::new()
            .column("name", Column::Name)
            .column("semester", Column::Semester)
            .column("created_at", Column::CreatedAt)
    }

    /// 创建学年
    pub async fn create_academic_year_impl(
        &self,
        req: CreateAcademicYearRequest,
    ) -> Result<AcademicYear> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(generate_id()),
            name: Set(req.name),
            semester: Set(req.semester.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("创建学年失败: {e}")))?;

        Ok(result.into_academic_year())
    }

    /// 通过 ID 获取学年
    pub async fn get_academic_year_by_id_impl(&self, id: &str) -> Result<Option<AcademicYear>> {
        let result = AcademicYears::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询学年失败: {e}")))?;

        Ok(result.map(|m| m.into_academic_year()))
    }

    /// 分页列出学年
    pub async fn list_academic_years_with_pagination_impl(
        &self,
        query: AcademicYearListQuery,
    ) -> Result<AcademicYearListResponse> {
        let (page, size) = normalize_pagination(query.page, query.size);

        let mut select = AcademicYears::find();

        select = Self::academic_year_filters().apply(select, &query.filter_map());
        select = Self::academic_year_sorts().apply(select, query.sort.as_deref());

        select = select
            .order_by_desc(Column::CreatedAt)
            .order_by_asc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询学年总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询学年页数失败: {e}")))?;

        let years = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询学年列表失败: {e}")))?;

        Ok(AcademicYearListResponse {
            items: years.into_iter().map(|m| m.into_academic_year()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新学年信息
    pub async fn update_academic_year_impl(
        &self,
        id: &str,
        update: UpdateAcademicYearRequest,
    ) -> Result<Option<AcademicYear>> {
        let existing = self.get_academic_year_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id.to_string()),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(semester) = update.semester {
            model.semester = Set(semester.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("更新学年失败: {e}")))?;

        self.get_academic_year_by_id_impl(id).await
    }

    /// 删除学年
    pub async fn delete_academic_year_impl(&self, id: &str) -> Result<bool> {
        let result = AcademicYears::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("删除学年失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 批量删除学年
    pub async fn bulk_delete_academic_years_impl(&self, ids: &[String]) -> Result<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = AcademicYears::delete_many()
            .filter(Column::Id.is_in(ids.iter().cloned()))
            .exec(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("批量删除学年失败: {e}")))?;

        Ok(result.rows_affected)
    }
}
