//! 科目存储操作

use super::SeaOrmStorage;
use crate::entity::prelude::{Subjects, Teachers};
use crate::entity::subjects::{ActiveModel, Column};
use crate::errors::{Result, SiakadError};
use crate::models::{
    PaginationInfo,
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectListQuery, UpdateSubjectRequest},
        responses::SubjectListResponse,
    },
};
use crate::query::{FilterRegistry, SortRegistry, normalize_pagination};
use crate::utils::{escape_like_pattern, generate_id};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

impl SeaOrmStorage {
    // 科目资源的筛选分发表
    fn subject_filters() -> FilterRegistry<Subjects> {
        FilterRegistry::new()
            .register("search", |select, value| {
                let escaped = escape_like_pattern(value);
                select.filter(
                    Condition::any()
                        .add(Column::Name.contains(&escaped))
                        .add(Column::Code.contains(&escaped)),
                )
            })
            .register("teacher_id", |select, value| {
                select.filter(Column::TeacherId.eq(value))
            })
    }

    // 科目资源的排序键
    fn subject_sorts() -> SortRegistry<Subjects> {
        SortRegistry::new()
            .column("name", Column::Name)
            .column("code", Column::Code)
            .column("passing_grade", Column::PassingGrade)
            .column("created_at", Column::CreatedAt)
    }

    /// 创建科目
    pub async fn create_subject_impl(
        &self,
        say_id: &str,
        req: CreateSubjectRequest,
    ) -> Result<Subject> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(generate_id()),
            school_academic_year_id: Set(say_id.to_string()),
            teacher_id: Set(req.teacher_id),
            name: Set(req.name),
            code: Set(req.code),
            passing_grade: Set(req.passing_grade),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("创建科目失败: {e}")))?;

        Ok(result.into_subject())
    }

    /// 获取作用域内的科目（含任课教师姓名）
    pub async fn get_subject_impl(&self, say_id: &str, id: &str) -> Result<Option<Subject>> {
        let result = Subjects::find_by_id(id)
            .filter(Column::SchoolAcademicYearId.eq(say_id))
            .find_also_related(Teachers)
            .one(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(result.map(|(subject, teacher)| {
            let mut subject = subject.into_subject();
            subject.teacher_name = teacher.map(|t| t.name);
            subject
        }))
    }

    /// 分页列出科目
    pub async fn list_subjects_with_pagination_impl(
        &self,
        say_id: &str,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse> {
        let (page, size) = normalize_pagination(query.page, query.size);

        let mut select = Subjects::find().filter(Column::SchoolAcademicYearId.eq(say_id));

        select = Self::subject_filters().apply(select, &query.filter_map());
        select = Self::subject_sorts().apply(select, query.sort.as_deref());

        select = select.order_by_asc(Column::Name).order_by_asc(Column::Id);

        let paginator = select.find_also_related(Teachers).paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询科目总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询科目页数失败: {e}")))?;

        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询科目列表失败: {e}")))?;

        Ok(SubjectListResponse {
            items: rows
                .into_iter()
                .map(|(subject, teacher)| {
                    let mut subject = subject.into_subject();
                    subject.teacher_name = teacher.map(|t| t.name);
                    subject
                })
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 列出作用域内全部科目（报表用）
    pub async fn list_subjects_all_impl(&self, say_id: &str) -> Result<Vec<Subject>> {
        let rows = Subjects::find()
            .filter(Column::SchoolAcademicYearId.eq(say_id))
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_subject()).collect())
    }

    /// 更新科目信息
    pub async fn update_subject_impl(
        &self,
        say_id: &str,
        id: &str,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        let existing = self.get_subject_impl(say_id, id).await?;
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

        if let Some(code) = update.code {
            model.code = Set(Some(code));
        }

        if let Some(teacher_id) = update.teacher_id {
            model.teacher_id = Set(Some(teacher_id));
        }

        if let Some(passing_grade) = update.passing_grade {
            model.passing_grade = Set(passing_grade);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("更新科目失败: {e}")))?;

        self.get_subject_impl(say_id, id).await
    }

    /// 删除科目
    pub async fn delete_subject_impl(&self, say_id: &str, id: &str) -> Result<bool> {
        let result = Subjects::delete_many()
            .filter(Column::SchoolAcademicYearId.eq(say_id))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("删除科目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 批量删除科目
    pub async fn bulk_delete_subjects_impl(&self, say_id: &str, ids: &[String]) -> Result<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = Subjects::delete_many()
            .filter(Column::SchoolAcademicYearId.eq(say_id))
            .filter(Column::Id.is_in(ids.iter().cloned()))
            .exec(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("批量删除科目失败: {e}")))?;

        Ok(result.rows_affected)
    }
}
