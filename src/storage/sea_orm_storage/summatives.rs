//! 总结性评价存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::prelude::{StudentSummatives, Students, Summatives};
use crate::entity::summatives::{ActiveModel, Column};
use crate::entity::{student_summatives, students};
use crate::errors::{Result, SiakadError};
use crate::models::{
    PaginationInfo,
    summatives::{
        entities::Summative,
        requests::{
            CreateSummativeRequest, ScoreEntry, SummativeListQuery, UpdateSummativeRequest,
        },
        responses::{StudentScore, SummativeListResponse},
    },
};
use crate::query::{FilterRegistry, SortRegistry, normalize_pagination};
use crate::utils::{escape_like_pattern, generate_id};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    // 评价资源的筛选分发表
    fn summative_filters() -> FilterRegistry<Summatives> {
        FilterRegistry::new().register("search", |select, value| {
            let escaped = escape_like_pattern(value);
            select.filter(Column::Title.contains(&escaped))
        })
    }

    // 评价资源的排序键
    fn summative_sorts() -> SortRegistry<Summatives> {
        SortRegistry::new()
            .column("title", Column::Title)
            .column("assessed_at", Column::AssessedAt)
            .column("created_at", Column::CreatedAt)
    }

    /// 创建评价
    pub async fn create_summative_impl(
        &self,
        subject_id: &str,
        req: CreateSummativeRequest,
    ) -> Result<Summative> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(generate_id()),
            subject_id: Set(subject_id.to_string()),
            title: Set(req.title),
            description: Set(req.description),
            assessed_at: Set(req.assessed_at),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("创建评价失败: {e}")))?;

        Ok(result.into_summative())
    }

    /// 获取科目下的评价
    pub async fn get_summative_impl(
        &self,
        subject_id: &str,
        id: &str,
    ) -> Result<Option<Summative>> {
        let result = Summatives::find_by_id(id)
            .filter(Column::SubjectId.eq(subject_id))
            .one(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询评价失败: {e}")))?;

        Ok(result.map(|m| m.into_summative()))
    }

    /// 分页列出科目下的评价
    pub async fn list_summatives_with_pagination_impl(
        &self,
        subject_id: &str,
        query: SummativeListQuery,
    ) -> Result<SummativeListResponse> {
        let (page, size) = normalize_pagination(query.page, query.size);

        let mut select = Summatives::find().filter(Column::SubjectId.eq(subject_id));

        select = Self::summative_filters().apply(select, &query.filter_map());
        select = Self::summative_sorts().apply(select, query.sort.as_deref());

        select = select
            .order_by_desc(Column::CreatedAt)
            .order_by_asc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询评价总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询评价页数失败: {e}")))?;

        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询评价列表失败: {e}")))?;

        Ok(SummativeListResponse {
            items: rows.into_iter().map(|m| m.into_summative()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新评价信息
    pub async fn update_summative_impl(
        &self,
        subject_id: &str,
        id: &str,
        update: UpdateSummativeRequest,
    ) -> Result<Option<Summative>> {
        let existing = self.get_summative_impl(subject_id, id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id.to_string()),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(assessed_at) = update.assessed_at {
            model.assessed_at = Set(Some(assessed_at));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("更新评价失败: {e}")))?;

        self.get_summative_impl(subject_id, id).await
    }

    /// 删除评价
    pub async fn delete_summative_impl(&self, subject_id: &str, id: &str) -> Result<bool> {
        let result = Summatives::delete_many()
            .filter(Column::SubjectId.eq(subject_id))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("删除评价失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 批量删除评价
    pub async fn bulk_delete_summatives_impl(
        &self,
        subject_id: &str,
        ids: &[String],
    ) -> Result<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = Summatives::delete_many()
            .filter(Column::SubjectId.eq(subject_id))
            .filter(Column::Id.is_in(ids.iter().cloned()))
            .exec(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("批量删除评价失败: {e}")))?;

        Ok(result.rows_affected)
    }

    /// 批量录入/更新成绩
    ///
    /// 按 (评价, 学生) 键 upsert，返回写入数量。
    pub async fn upsert_student_scores_impl(
        &self,
        summative_id: &str,
        scores: &[ScoreEntry],
    ) -> Result<u64> {
        let now = chrono::Utc::now().timestamp();
        let mut written = 0u64;

        for entry in scores {
            let existing = StudentSummatives::find()
                .filter(student_summatives::Column::SummativeId.eq(summative_id))
                .filter(student_summatives::Column::StudentId.eq(entry.student_id.clone()))
                .one(&self.db)
                .await
                .map_err(|e| SiakadError::database_operation(format!("查询成绩失败: {e}")))?;

            match existing {
                Some(row) => {
                    let model = student_summatives::ActiveModel {
                        id: Set(row.id),
                        score: Set(entry.score),
                        updated_at: Set(now),
                        ..Default::default()
                    };
                    model.update(&self.db).await.map_err(|e| {
                        SiakadError::database_operation(format!("更新成绩失败: {e}"))
                    })?;
                }
                None => {
                    let model = student_summatives::ActiveModel {
                        id: Set(generate_id()),
                        summative_id: Set(summative_id.to_string()),
                        student_id: Set(entry.student_id.clone()),
                        score: Set(entry.score),
                        created_at: Set(now),
                        updated_at: Set(now),
                    };
                    model.insert(&self.db).await.map_err(|e| {
                        SiakadError::database_operation(format!("录入成绩失败: {e}"))
                    })?;
                }
            }
            written += 1;
        }

        Ok(written)
    }

    /// 列出评价的成绩
    ///
    /// 返回作用域内全部学生，未录入成绩的学生分数为 None。
    pub async fn list_summative_scores_impl(
        &self,
        say_id: &str,
        summative_id: &str,
    ) -> Result<Vec<StudentScore>> {
        let score_rows = StudentSummatives::find()
            .filter(student_summatives::Column::SummativeId.eq(summative_id))
            .all(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询成绩失败: {e}")))?;

        let scores: HashMap<String, f64> = score_rows
            .into_iter()
            .map(|row| (row.student_id, row.score))
            .collect();

        let student_rows = Students::find()
            .filter(students::Column::SchoolAcademicYearId.eq(say_id))
            .order_by_asc(students::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(student_rows
            .into_iter()
            .map(|student| StudentScore {
                score: scores.get(&student.id).copied(),
                student_id: student.id,
                student_name: student.name,
                nisn: student.nisn,
            })
            .collect())
    }
}
