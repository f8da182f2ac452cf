//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod academic_years;
mod classrooms;
mod reports;
mod school_academic_years;
mod schools;
mod students;
mod subjects;
mod summatives;
mod teachers;

use crate::config::AppConfig;
use crate::errors::{Result, SiakadError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| SiakadError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SiakadError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| SiakadError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SiakadError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SiakadError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    academic_years::{
        entities::AcademicYear,
        requests::{AcademicYearListQuery, CreateAcademicYearRequest, UpdateAcademicYearRequest},
        responses::AcademicYearListResponse,
    },
    classrooms::{
        entities::Classroom,
        requests::{ClassroomListQuery, CreateClassroomRequest, UpdateClassroomRequest},
        responses::ClassroomListResponse,
    },
    school_academic_years::{
        entities::SchoolAcademicYear,
        requests::{AttachAcademicYearRequest, SchoolAcademicYearListQuery},
        responses::{AcademicYearOption, SchoolAcademicYearListResponse},
    },
    schools::{
        entities::School,
        requests::{CreateSchoolRequest, SchoolListQuery, UpdateSchoolRequest},
        responses::SchoolListResponse,
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectListQuery, UpdateSubjectRequest},
        responses::SubjectListResponse,
    },
    summatives::{
        entities::Summative,
        requests::{CreateSummativeRequest, ScoreEntry, SummativeListQuery, UpdateSummativeRequest},
        responses::{StudentScore, SummativeListResponse},
    },
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, TeacherListQuery, UpdateTeacherRequest},
        responses::TeacherListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 学校模块
    async fn create_school(&self, school: CreateSchoolRequest) -> Result<School> {
        self.create_school_impl(school).await
    }

    async fn get_school_by_id(&self, id: &str) -> Result<Option<School>> {
        self.get_school_by_id_impl(id).await
    }

    async fn list_schools_with_pagination(
        &self,
        query: SchoolListQuery,
    ) -> Result<SchoolListResponse> {
        self.list_schools_with_pagination_impl(query).await
    }

    async fn update_school(&self, id: &str, update: UpdateSchoolRequest) -> Result<Option<School>> {
        self.update_school_impl(id, update).await
    }

    async fn delete_school(&self, id: &str) -> Result<bool> {
        self.delete_school_impl(id).await
    }

    async fn bulk_delete_schools(&self, ids: &[String]) -> Result<u64> {
        self.bulk_delete_schools_impl(ids).await
    }

    async fn count_schools(&self) -> Result<u64> {
        self.count_schools_impl().await
    }

    // 学年模块
    async fn create_academic_year(&self, year: CreateAcademicYearRequest) -> Result<AcademicYear> {
        self.create_academic_year_impl(year).await
    }

    async fn get_academic_year_by_id(&self, id: &str) -> Result<Option<AcademicYear>> {
        self.get_academic_year_by_id_impl(id).await
    }

    async fn list_academic_years_with_pagination(
        &self,
        query: AcademicYearListQuery,
    ) -> Result<AcademicYearListResponse> {
        self.list_academic_years_with_pagination_impl(query).await
    }

    async fn update_academic_year(
        &self,
        id: &str,
        update: UpdateAcademicYearRequest,
    ) -> Result<Option<AcademicYear>> {
        self.update_academic_year_impl(id, update).await
    }

    async fn delete_academic_year(&self, id: &str) -> Result<bool> {
        self.delete_academic_year_impl(id).await
    }

    async fn bulk_delete_academic_years(&self, ids: &[String]) -> Result<u64> {
        self.bulk_delete_academic_years_impl(ids).await
    }

    // 学校学年模块
    async fn attach_academic_year(
        &self,
        school_id: &str,
        request: AttachAcademicYearRequest,
    ) -> Result<SchoolAcademicYear> {
        self.attach_academic_year_impl(school_id, request).await
    }

    async fn get_school_academic_year(
        &self,
        school_id: &str,
        say_id: &str,
    ) -> Result<Option<SchoolAcademicYear>> {
        self.get_school_academic_year_impl(school_id, say_id).await
    }

    async fn list_school_academic_years_with_pagination(
        &self,
        school_id: &str,
        query: SchoolAcademicYearListQuery,
    ) -> Result<SchoolAcademicYearListResponse> {
        self.list_school_academic_years_with_pagination_impl(school_id, query)
            .await
    }

    async fn list_academic_year_options(
        &self,
        school_id: &str,
    ) -> Result<Vec<AcademicYearOption>> {
        self.list_academic_year_options_impl(school_id).await
    }

    async fn activate_school_academic_year(
        &self,
        school_id: &str,
        say_id: &str,
    ) -> Result<Option<SchoolAcademicYear>> {
        self.activate_school_academic_year_impl(school_id, say_id)
            .await
    }

    async fn detach_academic_year(&self, school_id: &str, say_id: &str) -> Result<bool> {
        self.detach_academic_year_impl(school_id, say_id).await
    }

    // 教师模块
    async fn create_teacher(&self, say_id: &str, teacher: CreateTeacherRequest) -> Result<Teacher> {
        self.create_teacher_impl(say_id, teacher).await
    }

    async fn get_teacher(&self, say_id: &str, id: &str) -> Result<Option<Teacher>> {
        self.get_teacher_impl(say_id, id).await
    }

    async fn list_teachers_with_pagination(
        &self,
        say_id: &str,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse> {
        self.list_teachers_with_pagination_impl(say_id, query).await
    }

    async fn update_teacher(
        &self,
        say_id: &str,
        id: &str,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        self.update_teacher_impl(say_id, id, update).await
    }

    async fn delete_teacher(&self, say_id: &str, id: &str) -> Result<bool> {
        self.delete_teacher_impl(say_id, id).await
    }

    async fn bulk_delete_teachers(&self, say_id: &str, ids: &[String]) -> Result<u64> {
        self.bulk_delete_teachers_impl(say_id, ids).await
    }

    // 班级模块
    async fn create_classroom(
        &self,
        say_id: &str,
        classroom: CreateClassroomRequest,
    ) -> Result<Classroom> {
        self.create_classroom_impl(say_id, classroom).await
    }

    async fn get_classroom(&self, say_id: &str, id: &str) -> Result<Option<Classroom>> {
        self.get_classroom_impl(say_id, id).await
    }

    async fn list_classrooms_with_pagination(
        &self,
        say_id: &str,
        query: ClassroomListQuery,
    ) -> Result<ClassroomListResponse> {
        self.list_classrooms_with_pagination_impl(say_id, query)
            .await
    }

    async fn update_classroom(
        &self,
        say_id: &str,
        id: &str,
        update: UpdateClassroomRequest,
    ) -> Result<Option<Classroom>> {
        self.update_classroom_impl(say_id, id, update).await
    }

    async fn delete_classroom(&self, say_id: &str, id: &str) -> Result<bool> {
        self.delete_classroom_impl(say_id, id).await
    }

    async fn bulk_delete_classrooms(&self, say_id: &str, ids: &[String]) -> Result<u64> {
        self.bulk_delete_classrooms_impl(say_id, ids).await
    }

    async fn assign_students_to_classroom(
        &self,
        say_id: &str,
        classroom_id: &str,
        student_ids: &[String],
    ) -> Result<u64> {
        self.assign_students_to_classroom_impl(say_id, classroom_id, student_ids)
            .await
    }

    async fn remove_student_from_classroom(
        &self,
        classroom_id: &str,
        student_id: &str,
    ) -> Result<bool> {
        self.remove_student_from_classroom_impl(classroom_id, student_id)
            .await
    }

    async fn list_classroom_students_with_pagination(
        &self,
        classroom_id: &str,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        self.list_classroom_students_with_pagination_impl(classroom_id, query)
            .await
    }

    // 学生模块
    async fn create_student(&self, say_id: &str, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(say_id, student).await
    }

    async fn get_student(&self, say_id: &str, id: &str) -> Result<Option<Student>> {
        self.get_student_impl(say_id, id).await
    }

    async fn list_students_with_pagination(
        &self,
        say_id: &str,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(say_id, query).await
    }

    async fn update_student(
        &self,
        say_id: &str,
        id: &str,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(say_id, id, update).await
    }

    async fn delete_student(&self, say_id: &str, id: &str) -> Result<bool> {
        self.delete_student_impl(say_id, id).await
    }

    async fn bulk_delete_students(&self, say_id: &str, ids: &[String]) -> Result<u64> {
        self.bulk_delete_students_impl(say_id, ids).await
    }

    async fn list_students_for_export_filtered(
        &self,
        say_id: &str,
        limit: u64,
        gender: Option<String>,
        classroom_id: Option<String>,
        search: Option<&str>,
    ) -> Result<Vec<Student>> {
        self.list_students_for_export_filtered_impl(say_id, limit, gender, classroom_id, search)
            .await
    }

    // 科目模块
    async fn create_subject(
        &self,
        say_id: &str,
        subject: CreateSubjectRequest,
    ) -> Result<Subject> {
        self.create_subject_impl(say_id, subject).await
    }

    async fn get_subject(&self, say_id: &str, id: &str) -> Result<Option<Subject>> {
        self.get_subject_impl(say_id, id).await
    }

    async fn list_subjects_with_pagination(
        &self,
        say_id: &str,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse> {
        self.list_subjects_with_pagination_impl(say_id, query).await
    }

    async fn list_subjects_all(&self, say_id: &str) -> Result<Vec<Subject>> {
        self.list_subjects_all_impl(say_id).await
    }

    async fn update_subject(
        &self,
        say_id: &str,
        id: &str,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        self.update_subject_impl(say_id, id, update).await
    }

    async fn delete_subject(&self, say_id: &str, id: &str) -> Result<bool> {
        self.delete_subject_impl(say_id, id).await
    }

    async fn bulk_delete_subjects(&self, say_id: &str, ids: &[String]) -> Result<u64> {
        self.bulk_delete_subjects_impl(say_id, ids).await
    }

    // 评价模块
    async fn create_summative(
        &self,
        subject_id: &str,
        summative: CreateSummativeRequest,
    ) -> Result<Summative> {
        self.create_summative_impl(subject_id, summative).await
    }

    async fn get_summative(&self, subject_id: &str, id: &str) -> Result<Option<Summative>> {
        self.get_summative_impl(subject_id, id).await
    }

    async fn list_summatives_with_pagination(
        &self,
        subject_id: &str,
        query: SummativeListQuery,
    ) -> Result<SummativeListResponse> {
        self.list_summatives_with_pagination_impl(subject_id, query)
            .await
    }

    async fn update_summative(
        &self,
        subject_id: &str,
        id: &str,
        update: UpdateSummativeRequest,
    ) -> Result<Option<Summative>> {
        self.update_summative_impl(subject_id, id, update).await
    }

    async fn delete_summative(&self, subject_id: &str, id: &str) -> Result<bool> {
        self.delete_summative_impl(subject_id, id).await
    }

    async fn bulk_delete_summatives(&self, subject_id: &str, ids: &[String]) -> Result<u64> {
        self.bulk_delete_summatives_impl(subject_id, ids).await
    }

    async fn upsert_student_scores(
        &self,
        summative_id: &str,
        scores: &[ScoreEntry],
    ) -> Result<u64> {
        self.upsert_student_scores_impl(summative_id, scores).await
    }

    async fn list_summative_scores(
        &self,
        say_id: &str,
        summative_id: &str,
    ) -> Result<Vec<StudentScore>> {
        self.list_summative_scores_impl(say_id, summative_id).await
    }

    // 报表模块
    async fn list_student_score_rows(&self, student_id: &str) -> Result<Vec<(String, f64)>> {
        self.list_student_score_rows_impl(student_id).await
    }

    async fn list_students_score_rows(
        &self,
        student_ids: &[String],
    ) -> Result<Vec<(String, String, f64)>> {
        self.list_students_score_rows_impl(student_ids).await
    }
}
