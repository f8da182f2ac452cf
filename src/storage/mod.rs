use std::sync::Arc;

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
        responses::StudentScore,
        responses::SummativeListResponse,
    },
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, TeacherListQuery, UpdateTeacherRequest},
        responses::TeacherListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 学校管理方法
    // 创建学校
    async fn create_school(&self, school: CreateSchoolRequest) -> Result<School>;
    // 通过ID获取学校信息
    async fn get_school_by_id(&self, id: &str) -> Result<Option<School>>;
    // 列出学校
    async fn list_schools_with_pagination(&self, query: SchoolListQuery)
    -> Result<SchoolListResponse>;
    // 更新学校信息
    async fn update_school(&self, id: &str, update: UpdateSchoolRequest) -> Result<Option<School>>;
    // 删除学校
    async fn delete_school(&self, id: &str) -> Result<bool>;
    // 批量删除学校
    async fn bulk_delete_schools(&self, ids: &[String]) -> Result<u64>;
    // 统计学校数量
    async fn count_schools(&self) -> Result<u64>;

    /// 学年管理方法
    // 创建学年
    async fn create_academic_year(&self, year: CreateAcademicYearRequest) -> Result<AcademicYear>;
    // 通过ID获取学年信息
    async fn get_academic_year_by_id(&self, id: &str) -> Result<Option<AcademicYear>>;
    // 列出学年
    async fn list_academic_years_with_pagination(
        &self,
        query: AcademicYearListQuery,
    ) -> Result<AcademicYearListResponse>;
    // 更新学年信息
    async fn update_academic_year(
        &self,
        id: &str,
        update: UpdateAcademicYearRequest,
    ) -> Result<Option<AcademicYear>>;
    // 删除学年
    async fn delete_academic_year(&self, id: &str) -> Result<bool>;
    // 批量删除学年
    async fn bulk_delete_academic_years(&self, ids: &[String]) -> Result<u64>;

    /// 学校学年管理方法
    // 为学校挂接学年
    async fn attach_academic_year(
        &self,
        school_id: &str,
        request: AttachAcademicYearRequest,
    ) -> Result<SchoolAcademicYear>;
    // 获取属于指定学校的学校学年（作用域校验入口）
    async fn get_school_academic_year(
        &self,
        school_id: &str,
        say_id: &str,
    ) -> Result<Option<SchoolAcademicYear>>;
    // 列出学校挂接的学年
    async fn list_school_academic_years_with_pagination(
        &self,
        school_id: &str,
        query: SchoolAcademicYearListQuery,
    ) -> Result<SchoolAcademicYearListResponse>;
    // 登录下拉框的学年选项
    async fn list_academic_year_options(&self, school_id: &str)
    -> Result<Vec<AcademicYearOption>>;
    // 启用某学年，同校其余学年全部停用
    async fn activate_school_academic_year(
        &self,
        school_id: &str,
        say_id: &str,
    ) -> Result<Option<SchoolAcademicYear>>;
    // 解除学校与学年的挂接
    async fn detach_academic_year(&self, school_id: &str, say_id: &str) -> Result<bool>;

    /// 教师管理方法
    // 创建教师
    async fn create_teacher(&self, say_id: &str, teacher: CreateTeacherRequest) -> Result<Teacher>;
    // 获取作用域内的教师
    async fn get_teacher(&self, say_id: &str, id: &str) -> Result<Option<Teacher>>;
    // 列出教师
    async fn list_teachers_with_pagination(
        &self,
        say_id: &str,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse>;
    // 更新教师信息
    async fn update_teacher(
        &self,
        say_id: &str,
        id: &str,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>>;
    // 删除教师
    async fn delete_teacher(&self, say_id: &str, id: &str) -> Result<bool>;
    // 批量删除教师
    async fn bulk_delete_teachers(&self, say_id: &str, ids: &[String]) -> Result<u64>;

    /// 班级管理方法
    // 创建班级
    async fn create_classroom(
        &self,
        say_id: &str,
        classroom: CreateClassroomRequest,
    ) -> Result<Classroom>;
    // 获取作用域内的班级
    async fn get_classroom(&self, say_id: &str, id: &str) -> Result<Option<Classroom>>;
    // 列出班级
    async fn list_classrooms_with_pagination(
        &self,
        say_id: &str,
        query: ClassroomListQuery,
    ) -> Result<ClassroomListResponse>;
    // 更新班级信息
    async fn update_classroom(
        &self,
        say_id: &str,
        id: &str,
        update: UpdateClassroomRequest,
    ) -> Result<Option<Classroom>>;
    // 删除班级
    async fn delete_classroom(&self, say_id: &str, id: &str) -> Result<bool>;
    // 批量删除班级
    async fn bulk_delete_classrooms(&self, say_id: &str, ids: &[String]) -> Result<u64>;
    // 分配学生进班，返回实际分配数量
    async fn assign_students_to_classroom(
        &self,
        say_id: &str,
        classroom_id: &str,
        student_ids: &[String],
    ) -> Result<u64>;
    // 将学生移出班级
    async fn remove_student_from_classroom(
        &self,
        classroom_id: &str,
        student_id: &str,
    ) -> Result<bool>;
    // 列出班级成员
    async fn list_classroom_students_with_pagination(
        &self,
        classroom_id: &str,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;

    /// 学生管理方法
    // 创建学生（含家长/监护人信息）
    async fn create_student(&self, say_id: &str, student: CreateStudentRequest) -> Result<Student>;
    // 获取作用域内的学生（含家长/监护人信息）
    async fn get_student(&self, say_id: &str, id: &str) -> Result<Option<Student>>;
    // 列出学生
    async fn list_students_with_pagination(
        &self,
        say_id: &str,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    // 更新学生信息（含家长/监护人信息）
    async fn update_student(
        &self,
        say_id: &str,
        id: &str,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    // 删除学生
    async fn delete_student(&self, say_id: &str, id: &str) -> Result<bool>;
    // 批量删除学生
    async fn bulk_delete_students(&self, say_id: &str, ids: &[String]) -> Result<u64>;
    // 导出用学生列表（带筛选，限制行数）
    async fn list_students_for_export_filtered(
        &self,
        say_id: &str,
        limit: u64,
        gender: Option<String>,
        classroom_id: Option<String>,
        search: Option<&str>,
    ) -> Result<Vec<Student>>;

    /// 科目管理方法
    // 创建科目
    async fn create_subject(&self, say_id: &str, subject: CreateSubjectRequest)
    -> Result<Subject>;
    // 获取作用域内的科目
    async fn get_subject(&self, say_id: &str, id: &str) -> Result<Option<Subject>>;
    // 列出科目
    async fn list_subjects_with_pagination(
        &self,
        say_id: &str,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse>;
    // 列出作用域内全部科目（报表用）
    async fn list_subjects_all(&self, say_id: &str) -> Result<Vec<Subject>>;
    // 更新科目信息
    async fn update_subject(
        &self,
        say_id: &str,
        id: &str,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>>;
    // 删除科目
    async fn delete_subject(&self, say_id: &str, id: &str) -> Result<bool>;
    // 批量删除科目
    async fn bulk_delete_subjects(&self, say_id: &str, ids: &[String]) -> Result<u64>;

    /// 总结性评价管理方法
    // 创建评价
    async fn create_summative(
        &self,
        subject_id: &str,
        summative: CreateSummativeRequest,
    ) -> Result<Summative>;
    // 获取科目下的评价
    async fn get_summative(&self, subject_id: &str, id: &str) -> Result<Option<Summative>>;
    // 列出科目下的评价
    async fn list_summatives_with_pagination(
        &self,
        subject_id: &str,
        query: SummativeListQuery,
    ) -> Result<SummativeListResponse>;
    // 更新评价信息
    async fn update_summative(
        &self,
        subject_id: &str,
        id: &str,
        update: UpdateSummativeRequest,
    ) -> Result<Option<Summative>>;
    // 删除评价
    async fn delete_summative(&self, subject_id: &str, id: &str) -> Result<bool>;
    // 批量删除评价
    async fn bulk_delete_summatives(&self, subject_id: &str, ids: &[String]) -> Result<u64>;
    // 批量录入/更新成绩，按 (评价, 学生) 键 upsert，返回写入数量
    async fn upsert_student_scores(
        &self,
        summative_id: &str,
        scores: &[ScoreEntry],
    ) -> Result<u64>;
    // 列出评价的成绩（作用域内全部学生，未录入为 None）
    async fn list_summative_scores(
        &self,
        say_id: &str,
        summative_id: &str,
    ) -> Result<Vec<StudentScore>>;

    /// 报表查询方法
    // 学生的全部成绩行 (科目ID, 分数)
    async fn list_student_score_rows(&self, student_id: &str) -> Result<Vec<(String, f64)>>;
    // 一组学生的全部成绩行 (学生ID, 科目ID, 分数)
    async fn list_students_score_rows(
        &self,
        student_ids: &[String],
    ) -> Result<Vec<(String, String, f64)>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
