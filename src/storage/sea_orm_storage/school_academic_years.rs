//! 学校学年存储操作

use super::SeaOrmStorage;
use crate::entity::prelude::{AcademicYears, SchoolAcademicYears};
use crate::entity::school_academic_years::{ActiveModel, Column};
use crate::errors::{Result, SiakadError};
use crate::models::{
    PaginationInfo,
    school_academic_years::{
        entities::SchoolAcademicYear,
        requests::{AttachAcademicYearRequest, SchoolAcademicYearListQuery},
        responses::{AcademicYearOption, SchoolAcademicYearListResponse},
    },
};
use crate::query::normalize_pagination;
use crate::utils::generate_id;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 为学校挂接学年
    pub async fn attach_academic_year_impl(
        &self,
        school_id: &str,
        req: AttachAcademicYearRequest,
    ) -> Result<SchoolAcademicYear> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(generate_id()),
            school_id: Set(school_id.to_string()),
            academic_year_id: Set(req.academic_year_id),
            active: Set(req.active),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("挂接学年失败: {e}")))?;

        // 挂接时即启用的学年要压掉同校其它启用学年
        if result.active {
            let new_id = result.id.clone();
            return self
                .activate_school_academic_year_impl(school_id, &new_id)
                .await?
                .ok_or_else(|| {
                    SiakadError::database_operation("挂接后的学校学年丢失".to_string())
                });
        }

        Ok(result.into_school_academic_year())
    }

    /// 获取属于指定学校的学校学年
    ///
    /// 所有按学年作用域的路由都先经过这里做作用域校验。
    pub async fn get_school_academic_year_impl(
        &self,
        school_id: &str,
        say_id: &str,
    ) -> Result<Option<SchoolAcademicYear>> {
        let result = SchoolAcademicYears::find_by_id(say_id)
            .filter(Column::SchoolId.eq(school_id))
            .find_also_related(AcademicYears)
            .one(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询学校学年失败: {e}")))?;

        Ok(result.map(|(say, year)| {
            let mut say = say.into_school_academic_year();
            say.academic_year = year.map(|y| y.into_academic_year());
            say
        }))
    }

    /// 分页列出学校挂接的学年
    pub async fn list_school_academic_years_with_pagination_impl(
        &self,
        school_id: &str,
        query: SchoolAcademicYearListQuery,
    ) -> Result<SchoolAcademicYearListResponse> {
        let (page, size) = normalize_pagination(query.page, query.size);

        let mut select = SchoolAcademicYears::find().filter(Column::SchoolId.eq(school_id));

        if let Some(active) = query.active {
            select = select.filter(Column::Active.eq(active));
        }

        select = select
            .order_by_desc(Column::CreatedAt)
            .order_by_asc(Column::Id);

        let paginator = select.find_also_related(AcademicYears).paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询学校学年总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询学校学年页数失败: {e}")))?;

        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询学校学年列表失败: {e}")))?;

        Ok(SchoolAcademicYearListResponse {
            items: rows
                .into_iter()
                .map(|(say, year)| {
                    let mut say = say.into_school_academic_year();
                    say.academic_year = year.map(|y| y.into_academic_year());
                    say
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

    /// 登录下拉框的学年选项
    pub async fn list_academic_year_options_impl(
        &self,
        school_id: &str,
    ) -> Result<Vec<AcademicYearOption>> {
        let rows = SchoolAcademicYears::find()
            .filter(Column::SchoolId.eq(school_id))
            .order_by_desc(Column::CreatedAt)
            .find_also_related(AcademicYears)
            .all(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询学年选项失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(say, year)| {
                let label = match year {
                    Some(ref y) => format!("{} - {}", y.name, y.semester),
                    None => say.academic_year_id.clone(),
                };
                AcademicYearOption {
                    id: say.id,
                    label,
                    active: say.active,
                }
            })
            .collect())
    }

    /// 启用某学年
    ///
    /// 同校最多一个启用学年：先全部停用，再启用目标行，在事务中完成。
    pub async fn activate_school_academic_year_impl(
        &self,
        school_id: &str,
        say_id: &str,
    ) -> Result<Option<SchoolAcademicYear>> {
        let existing = self.get_school_academic_year_impl(school_id, say_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SiakadError::database_operation(format!("开启事务失败: {e}")))?;

        SchoolAcademicYears::update_many()
            .col_expr(Column::Active, Expr::value(false))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::SchoolId.eq(school_id))
            .exec(&txn)
            .await
            .map_err(|e| SiakadError::database_operation(format!("停用旧学年失败: {e}")))?;

        SchoolAcademicYears::update_many()
            .col_expr(Column::Active, Expr::value(true))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::SchoolId.eq(school_id))
            .filter(Column::Id.eq(say_id))
            .exec(&txn)
            .await
            .map_err(|e| SiakadError::database_operation(format!("启用学年失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| SiakadError::database_operation(format!("提交事务失败: {e}")))?;

        self.get_school_academic_year_impl(school_id, say_id).await
    }

    /// 解除学校与学年的挂接
    pub async fn detach_academic_year_impl(&self, school_id: &str, say_id: &str) -> Result<bool> {
        let result = SchoolAcademicYears::delete_many()
            .filter(Column::SchoolId.eq(school_id))
            .filter(Column::Id.eq(say_id))
            .exec(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("解除学年挂接失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
