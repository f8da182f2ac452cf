//! 教师存储操作

use super::SeaOrmStorage;
use crate::entity::prelude::Teachers;
use crate::entity::teachers::{ActiveModel, Column};
use crate::errors::{Result, SiakadError};
use crate::models::{
    PaginationInfo,
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, TeacherListQuery, UpdateTeacherRequest},
        responses::TeacherListResponse,
    },
};
use crate::query::{FilterRegistry, SortRegistry, normalize_pagination};
use crate::utils::{escape_like_pattern, generate_id};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

impl SeaOrmStorage {
    // 教师资源的筛选分发表
    fn teacher_filters() -> FilterRegistry<Teachers> {
        FilterRegistry::new()
            .register("search", |select, value| {
                let escaped = escape_like_pattern(value);
                select.filter(
                    Condition::any()
                        .add(Column::Name.contains(&escaped))
                        .add(Column::Niy.contains(&escaped)),
                )
            })
            .register("gender", |select, value| {
                select.filter(Column::Gender.eq(value))
            })
    }

    // 教师资源的排序键
    fn teacher_sorts() -> SortRegistry<Teachers> {
        SortRegistry::new()
            .column("name", Column::Name)
            .column("niy", Column::Niy)
            .column("created_at", Column::CreatedAt)
    }

    /// 创建教师
    pub async fn create_teacher_impl(
        &self,
        say_id: &str,
        req: CreateTeacherRequest,
    ) -> Result<Teacher> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(generate_id()),
            school_academic_year_id: Set(say_id.to_string()),
            niy: Set(req.niy),
            name: Set(req.name),
            gender: Set(req.gender.to_string()),
            phone: Set(req.phone),
            email: Set(req.email),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("创建教师失败: {e}")))?;

        Ok(result.into_teacher())
    }

    /// 获取作用域内的教师
    pub async fn get_teacher_impl(&self, say_id: &str, id: &str) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(id)
            .filter(Column::SchoolAcademicYearId.eq(say_id))
            .one(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 分页列出教师
    pub async fn list_teachers_with_pagination_impl(
        &self,
        say_id: &str,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse> {
        let (page, size) = normalize_pagination(query.page, query.size);

        let mut select = Teachers::find().filter(Column::SchoolAcademicYearId.eq(say_id));

        select = Self::teacher_filters().apply(select, &query.filter_map());
        select = Self::teacher_sorts().apply(select, query.sort.as_deref());

        select = select
            .order_by_desc(Column::CreatedAt)
            .order_by_asc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询教师总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询教师页数失败: {e}")))?;

        let teachers = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(TeacherListResponse {
            items: teachers.into_iter().map(|m| m.into_teacher()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新教师信息
    pub async fn update_teacher_impl(
        &self,
        say_id: &str,
        id: &str,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        let existing = self.get_teacher_impl(say_id, id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id.to_string()),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(niy) = update.niy {
            model.niy = Set(niy);
        }

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(gender) = update.gender {
            model.gender = Set(gender.to_string());
        }

        if let Some(phone) = update.phone {
            model.phone = Set(Some(phone));
        }

        if let Some(email) = update.email {
            model.email = Set(Some(email));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("更新教师失败: {e}")))?;

        self.get_teacher_impl(say_id, id).await
    }

    /// 删除教师
    pub async fn delete_teacher_impl(&self, say_id: &str, id: &str) -> Result<bool> {
        let result = Teachers::delete_many()
            .filter(Column::SchoolAcademicYearId.eq(say_id))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("删除教师失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 批量删除教师
    pub async fn bulk_delete_teachers_impl(&self, say_id: &str, ids: &[String]) -> Result<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = Teachers::delete_many()
            .filter(Column::SchoolAcademicYearId.eq(say_id))
            .filter(Column::Id.is_in(ids.iter().cloned()))
            .exec(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("批量删除教师失败: {e}")))?;

        Ok(result.rows_affected)
    }
}
