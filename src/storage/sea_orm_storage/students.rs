//! 学生存储操作
//!
//! 家长与监护人记录随学生一并维护：创建/更新学生时写入，
//! 详情查询时填充。

use super::SeaOrmStorage;
use crate::entity::prelude::{StudentGuardians, StudentParents, Students};
use crate::entity::students::{ActiveModel, Column};
use crate::entity::{classroom_students, student_guardians, student_parents, students};
use crate::errors::{Result, SiakadError};
use crate::models::{
    PaginationInfo,
    students::{
        entities::{Student, StudentGuardian, StudentParent},
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};
use crate::query::{FilterRegistry, SortRegistry, normalize_pagination};
use crate::utils::{escape_like_pattern, generate_id};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};

impl SeaOrmStorage {
    // 学生资源的筛选分发表
    pub(crate) fn student_filters() -> FilterRegistry<Students> {
        FilterRegistry::new()
            .register("search", |select, value| {
                let escaped = escape_like_pattern(value);
                select.filter(
                    Condition::any()
                        .add(Column::Name.contains(&escaped))
                        .add(Column::Nisn.contains(&escaped)),
                )
            })
            .register("gender", |select, value| {
                select.filter(Column::Gender.eq(value))
            })
            .register("religion", |select, value| {
                select.filter(Column::Religion.eq(value))
            })
            // 按班级筛选要经过班级成员表，这里的筛选器自带 join
            .register("classroom_id", |select, value| {
                select
                    .join(
                        JoinType::InnerJoin,
                        students::Relation::ClassroomStudents.def(),
                    )
                    .filter(classroom_students::Column::ClassroomId.eq(value))
            })
    }

    // 学生资源的排序键
    pub(crate) fn student_sorts() -> SortRegistry<Students> {
        SortRegistry::new()
            .column("name", Column::Name)
            .column("nisn", Column::Nisn)
            .column("birth_date", Column::BirthDate)
            .column("created_at", Column::CreatedAt)
    }

    /// 创建学生
    pub async fn create_student_impl(
        &self,
        say_id: &str,
        req: CreateStudentRequest,
    ) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();
        let student_id = generate_id();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SiakadError::database_operation(format!("开启事务失败: {e}")))?;

        let model = ActiveModel {
            id: Set(student_id.clone()),
            school_academic_year_id: Set(say_id.to_string()),
            nisn: Set(req.nisn),
            name: Set(req.name),
            gender: Set(req.gender.to_string()),
            birth_place: Set(req.birth_place),
            birth_date: Set(req.birth_date),
            religion: Set(req.religion),
            address: Set(req.address),
            created_at: Set(now),
            updated_at: Set(now),
        };

        model
            .insert(&txn)
            .await
            .map_err(|e| SiakadError::database_operation(format!("创建学生失败: {e}")))?;

        if let Some(parent) = req.parent {
            let parent_model = student_parents::ActiveModel {
                id: Set(generate_id()),
                student_id: Set(student_id.clone()),
                father_name: Set(parent.father_name),
                father_occupation: Set(parent.father_occupation),
                mother_name: Set(parent.mother_name),
                mother_occupation: Set(parent.mother_occupation),
                phone: Set(parent.phone),
                address: Set(parent.address),
                created_at: Set(now),
                updated_at: Set(now),
            };
            parent_model
                .insert(&txn)
                .await
                .map_err(|e| SiakadError::database_operation(format!("写入家长信息失败: {e}")))?;
        }

        if let Some(guardian) = req.guardian {
            let guardian_model = student_guardians::ActiveModel {
                id: Set(generate_id()),
                student_id: Set(student_id.clone()),
                name: Set(guardian.name),
                occupation: Set(guardian.occupation),
                relationship: Set(guardian.relationship),
                phone: Set(guardian.phone),
                address: Set(guardian.address),
                created_at: Set(now),
                updated_at: Set(now),
            };
            guardian_model.insert(&txn).await.map_err(|e| {
                SiakadError::database_operation(format!("写入监护人信息失败: {e}"))
            })?;
        }

        txn.commit()
            .await
            .map_err(|e| SiakadError::database_operation(format!("提交事务失败: {e}")))?;

        self.get_student_impl(say_id, &student_id)
            .await?
            .ok_or_else(|| SiakadError::database_operation("新建学生查询失败".to_string()))
    }

    /// 获取作用域内的学生（含家长/监护人信息）
    pub async fn get_student_impl(&self, say_id: &str, id: &str) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .filter(Column::SchoolAcademicYearId.eq(say_id))
            .one(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询学生失败: {e}")))?;

        let Some(model) = result else {
            return Ok(None);
        };

        let parent = StudentParents::find()
            .filter(student_parents::Column::StudentId.eq(id))
            .one(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询家长信息失败: {e}")))?;

        let guardian = StudentGuardians::find()
            .filter(student_guardians::Column::StudentId.eq(id))
            .one(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询监护人信息失败: {e}")))?;

        let mut student = model.into_student();
        student.parent = parent.map(|p| p.into_student_parent());
        student.guardian = guardian.map(|g| g.into_student_guardian());
        Ok(Some(student))
    }

    /// 分页列出学生
    pub async fn list_students_with_pagination_impl(
        &self,
        say_id: &str,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let (page, size) = normalize_pagination(query.page, query.size);

        let mut select = Students::find().filter(Column::SchoolAcademicYearId.eq(say_id));

        select = Self::student_filters().apply(select, &query.filter_map());
        select = Self::student_sorts().apply(select, query.sort.as_deref());

        select = select.order_by_asc(Column::Name).order_by_asc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询学生总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询学生页数失败: {e}")))?;

        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(StudentListResponse {
            items: rows.into_iter().map(|m| m.into_student()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新学生信息（含家长/监护人信息）
    pub async fn update_student_impl(
        &self,
        say_id: &str,
        id: &str,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let existing = self.get_student_impl(say_id, id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SiakadError::database_operation(format!("开启事务失败: {e}")))?;

        let mut model = ActiveModel {
            id: Set(id.to_string()),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(nisn) = update.nisn {
            model.nisn = Set(nisn);
        }

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(gender) = update.gender {
            model.gender = Set(gender.to_string());
        }

        if let Some(birth_place) = update.birth_place {
            model.birth_place = Set(Some(birth_place));
        }

        if let Some(birth_date) = update.birth_date {
            model.birth_date = Set(Some(birth_date));
        }

        if let Some(religion) = update.religion {
            model.religion = Set(Some(religion));
        }

        if let Some(address) = update.address {
            model.address = Set(Some(address));
        }

        model
            .update(&txn)
            .await
            .map_err(|e| SiakadError::database_operation(format!("更新学生失败: {e}")))?;

        if let Some(parent) = update.parent {
            self.upsert_student_parent(&txn, id, parent, now).await?;
        }

        if let Some(guardian) = update.guardian {
            self.upsert_student_guardian(&txn, id, guardian, now).await?;
        }

        txn.commit()
            .await
            .map_err(|e| SiakadError::database_operation(format!("提交事务失败: {e}")))?;

        self.get_student_impl(say_id, id).await
    }

    // 家长记录与学生一对一，存在则整行覆盖
    async fn upsert_student_parent(
        &self,
        txn: &sea_orm::DatabaseTransaction,
        student_id: &str,
        parent: StudentParent,
        now: i64,
    ) -> Result<()> {
        let existing = StudentParents::find()
            .filter(student_parents::Column::StudentId.eq(student_id))
            .one(txn)
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询家长信息失败: {e}")))?;

        let model = student_parents::ActiveModel {
            id: Set(existing
                .as_ref()
                .map(|m| m.id.clone())
                .unwrap_or_else(generate_id)),
            student_id: Set(student_id.to_string()),
            father_name: Set(parent.father_name),
            father_occupation: Set(parent.father_occupation),
            mother_name: Set(parent.mother_name),
            mother_occupation: Set(parent.mother_occupation),
            phone: Set(parent.phone),
            address: Set(parent.address),
            created_at: Set(existing.as_ref().map(|m| m.created_at).unwrap_or(now)),
            updated_at: Set(now),
        };

        let result = if existing.is_some() {
            model.update(txn).await
        } else {
            model.insert(txn).await
        };
        result.map_err(|e| SiakadError::database_operation(format!("写入家长信息失败: {e}")))?;
        Ok(())
    }

    // 监护人记录与学生一对一，存在则整行覆盖
    async fn upsert_student_guardian(
        &self,
        txn: &sea_orm::DatabaseTransaction,
        student_id: &str,
        guardian: StudentGuardian,
        now: i64,
    ) -> Result<()> {
        let existing = StudentGuardians::find()
            .filter(student_guardians::Column::StudentId.eq(student_id))
            .one(txn)
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询监护人信息失败: {e}")))?;

        let model = student_guardians::ActiveModel {
            id: Set(existing
                .as_ref()
                .map(|m| m.id.clone())
                .unwrap_or_else(generate_id)),
            student_id: Set(student_id.to_string()),
            name: Set(guardian.name),
            occupation: Set(guardian.occupation),
            relationship: Set(guardian.relationship),
            phone: Set(guardian.phone),
            address: Set(guardian.address),
            created_at: Set(existing.as_ref().map(|m| m.created_at).unwrap_or(now)),
            updated_at: Set(now),
        };

        let result = if existing.is_some() {
            model.update(txn).await
        } else {
            model.insert(txn).await
        };
        result.map_err(|e| {
            SiakadError::database_operation(format!("写入监护人信息失败: {e}"))
        })?;
        Ok(())
    }

    /// 删除学生
    pub async fn delete_student_impl(&self, say_id: &str, id: &str) -> Result<bool> {
        let result = Students::delete_many()
            .filter(Column::SchoolAcademicYearId.eq(say_id))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 批量删除学生
    pub async fn bulk_delete_students_impl(&self, say_id: &str, ids: &[String]) -> Result<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = Students::delete_many()
            .filter(Column::SchoolAcademicYearId.eq(say_id))
            .filter(Column::Id.is_in(ids.iter().cloned()))
            .exec(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("批量删除学生失败: {e}")))?;

        Ok(result.rows_affected)
    }

    /// 导出用学生列表（带筛选，限制行数）
    pub async fn list_students_for_export_filtered_impl(
        &self,
        say_id: &str,
        limit: u64,
        gender: Option<String>,
        classroom_id: Option<String>,
        search: Option<&str>,
    ) -> Result<Vec<Student>> {
        let mut filters = Vec::new();
        if let Some(search) = search {
            filters.push(("search".to_string(), search.to_string()));
        }
        if let Some(gender) = gender {
            filters.push(("gender".to_string(), gender));
        }
        if let Some(classroom_id) = classroom_id {
            filters.push(("classroom_id".to_string(), classroom_id));
        }

        let mut select = Students::find().filter(Column::SchoolAcademicYearId.eq(say_id));
        select = Self::student_filters().apply(select, &filters);
        select = select
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .limit(limit);

        let rows = select
            .all(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询导出学生失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_student()).collect())
    }
}
