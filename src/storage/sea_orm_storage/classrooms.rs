//! 班级存储操作

use super::SeaOrmStorage;
use crate::entity::classroom_students;
use crate::entity::classrooms::{ActiveModel, Column};
use crate::entity::prelude::{ClassroomStudents, Classrooms, Students, Teachers};
use crate::entity::students;
use crate::errors::{Result, SiakadError};
use crate::models::{
    PaginationInfo,
    classrooms::{
        entities::Classroom,
        requests::{ClassroomListQuery, CreateClassroomRequest, UpdateClassroomRequest},
        responses::ClassroomListResponse,
    },
    students::{requests::StudentListQuery, responses::StudentListResponse},
};
use crate::query::{FilterRegistry, SortRegistry, normalize_pagination};
use crate::utils::{escape_like_pattern, generate_id};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};

impl SeaOrmStorage {
    // 班级资源的筛选分发表
    fn classroom_filters() -> FilterRegistry<Classrooms> {
        FilterRegistry::new()
            .register("search", |select, value| {
                let escaped = escape_like_pattern(value);
                select.filter(Column::Name.contains(&escaped))
            })
            .register("grade_level", |select, value| {
                match value.parse::<i32>() {
                    Ok(grade) => select.filter(Column::GradeLevel.eq(grade)),
                    // 非数字的年级筛选值忽略
                    Err(_) => select,
                }
            })
    }

    // 班级资源的排序键
    fn classroom_sorts() -> SortRegistry<Classrooms> {
        SortRegistry::new()
            .column("name", Column::Name)
            .column("grade_level", Column::GradeLevel)
            .column("created_at", Column::CreatedAt)
    }

    /// 创建班级
    pub async fn create_classroom_impl(
        &self,
        say_id: &str,
        req: CreateClassroomRequest,
    ) -> Result<Classroom> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(generate_id()),
            school_academic_year_id: Set(say_id.to_string()),
            name: Set(req.name),
            grade_level: Set(req.grade_level),
            homeroom_teacher_id: Set(req.homeroom_teacher_id),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("创建班级失败: {e}")))?;

        Ok(result.into_classroom())
    }

    /// 获取作用域内的班级（含班主任姓名与人数）
    pub async fn get_classroom_impl(&self, say_id: &str, id: &str) -> Result<Option<Classroom>> {
        let result = Classrooms::find_by_id(id)
            .filter(Column::SchoolAcademicYearId.eq(say_id))
            .find_also_related(Teachers)
            .one(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询班级失败: {e}")))?;

        let Some((classroom, teacher)) = result else {
            return Ok(None);
        };

        let student_count = ClassroomStudents::find()
            .filter(classroom_students::Column::ClassroomId.eq(id))
            .count(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("统计班级人数失败: {e}")))?;

        let mut classroom = classroom.into_classroom();
        classroom.homeroom_teacher_name = teacher.map(|t| t.name);
        classroom.student_count = Some(student_count as i64);
        Ok(Some(classroom))
    }

    /// 分页列出班级
    pub async fn list_classrooms_with_pagination_impl(
        &self,
        say_id: &str,
        query: ClassroomListQuery,
    ) -> Result<ClassroomListResponse> {
        let (page, size) = normalize_pagination(query.page, query.size);

        let mut select = Classrooms::find().filter(Column::SchoolAcademicYearId.eq(say_id));

        select = Self::classroom_filters().apply(select, &query.filter_map());
        select = Self::classroom_sorts().apply(select, query.sort.as_deref());

        select = select
            .order_by_asc(Column::GradeLevel)
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id);

        let paginator = select.find_also_related(Teachers).paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询班级总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询班级页数失败: {e}")))?;

        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询班级列表失败: {e}")))?;

        let mut items = Vec::with_capacity(rows.len());
        for (classroom, teacher) in rows {
            let student_count = ClassroomStudents::find()
                .filter(classroom_students::Column::ClassroomId.eq(classroom.id.clone()))
                .count(&self.db)
                .await
                .map_err(|e| {
                    SiakadError::database_operation(format!("统计班级人数失败: {e}"))
                })?;

            let mut classroom = classroom.into_classroom();
            classroom.homeroom_teacher_name = teacher.map(|t| t.name);
            classroom.student_count = Some(student_count as i64);
            items.push(classroom);
        }

        Ok(ClassroomListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新班级信息
    pub async fn update_classroom_impl(
        &self,
        say_id: &str,
        id: &str,
        update: UpdateClassroomRequest,
    ) -> Result<Option<Classroom>> {
        let existing = self.get_classroom_impl(say_id, id).await?;
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

        if let Some(grade_level) = update.grade_level {
            model.grade_level = Set(grade_level);
        }

        if let Some(homeroom_teacher_id) = update.homeroom_teacher_id {
            model.homeroom_teacher_id = Set(Some(homeroom_teacher_id));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("更新班级失败: {e}")))?;

        self.get_classroom_impl(say_id, id).await
    }

    /// 删除班级
    pub async fn delete_classroom_impl(&self, say_id: &str, id: &str) -> Result<bool> {
        let result = Classrooms::delete_many()
            .filter(Column::SchoolAcademicYearId.eq(say_id))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("删除班级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 批量删除班级
    pub async fn bulk_delete_classrooms_impl(&self, say_id: &str, ids: &[String]) -> Result<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = Classrooms::delete_many()
            .filter(Column::SchoolAcademicYearId.eq(say_id))
            .filter(Column::Id.is_in(ids.iter().cloned()))
            .exec(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("批量删除班级失败: {e}")))?;

        Ok(result.rows_affected)
    }

    /// 分配学生进班
    ///
    /// 不属于该学年的学生、以及本学年已有班级的学生直接跳过，
    /// 返回实际分配数量。
    pub async fn assign_students_to_classroom_impl(
        &self,
        say_id: &str,
        classroom_id: &str,
        student_ids: &[String],
    ) -> Result<u64> {
        if student_ids.is_empty() {
            return Ok(0);
        }

        // 本学年的全部班级，用于「一学年一个班」的检查
        let classroom_ids: Vec<String> = Classrooms::find()
            .filter(Column::SchoolAcademicYearId.eq(say_id))
            .all(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询班级失败: {e}")))?
            .into_iter()
            .map(|c| c.id)
            .collect();

        let now = chrono::Utc::now().timestamp();
        let mut assigned = 0u64;

        for student_id in student_ids {
            // 学生必须属于同一学校学年
            let in_scope = Students::find_by_id(student_id)
                .filter(students::Column::SchoolAcademicYearId.eq(say_id))
                .count(&self.db)
                .await
                .map_err(|e| SiakadError::database_operation(format!("查询学生失败: {e}")))?;
            if in_scope == 0 {
                continue;
            }

            // 本学年已有班级的学生跳过
            let already = ClassroomStudents::find()
                .filter(classroom_students::Column::StudentId.eq(student_id))
                .filter(
                    classroom_students::Column::ClassroomId.is_in(classroom_ids.iter().cloned()),
                )
                .count(&self.db)
                .await
                .map_err(|e| {
                    SiakadError::database_operation(format!("查询班级成员失败: {e}"))
                })?;
            if already > 0 {
                continue;
            }

            let model = classroom_students::ActiveModel {
                id: Set(generate_id()),
                classroom_id: Set(classroom_id.to_string()),
                student_id: Set(student_id.clone()),
                created_at: Set(now),
            };

            model.insert(&self.db).await.map_err(|e| {
                SiakadError::database_operation(format!("分配学生进班失败: {e}"))
            })?;
            assigned += 1;
        }

        Ok(assigned)
    }

    /// 将学生移出班级
    pub async fn remove_student_from_classroom_impl(
        &self,
        classroom_id: &str,
        student_id: &str,
    ) -> Result<bool> {
        let result = ClassroomStudents::delete_many()
            .filter(classroom_students::Column::ClassroomId.eq(classroom_id))
            .filter(classroom_students::Column::StudentId.eq(student_id))
            .exec(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("移出班级成员失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 分页列出班级成员
    pub async fn list_classroom_students_with_pagination_impl(
        &self,
        classroom_id: &str,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let (page, size) = normalize_pagination(query.page, query.size);

        let mut select = Students::find()
            .join(
                JoinType::InnerJoin,
                students::Relation::ClassroomStudents.def(),
            )
            .filter(classroom_students::Column::ClassroomId.eq(classroom_id));

        select = Self::student_filters().apply(select, &query.filter_map());
        select = Self::student_sorts().apply(select, query.sort.as_deref());

        select = select
            .order_by_asc(students::Column::Name)
            .order_by_asc(students::Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询班级成员总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询班级成员页数失败: {e}")))?;

        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询班级成员列表失败: {e}")))?;

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
}
