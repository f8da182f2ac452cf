pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod students;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::classrooms::requests::{
    AssignStudentsRequest, ClassroomQueryParams, CreateClassroomRequest, UpdateClassroomRequest,
};
use crate::models::common::BulkDeleteRequest;
use crate::models::students::requests::StudentQueryParams;
use crate::storage::Storage;

// 作用域内资源的路径参数 (school_id, say_id)
pub type ScopePath = (String, String);

pub struct ClassroomService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassroomService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取班级列表
    pub async fn list_classrooms(
        &self,
        request: &HttpRequest,
        scope: ScopePath,
        query: ClassroomQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_classrooms(self, request, scope, query).await
    }

    // 创建班级
    pub async fn create_classroom(
        &self,
        request: &HttpRequest,
        scope: ScopePath,
        classroom_data: CreateClassroomRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_classroom(self, request, scope, classroom_data).await
    }

    // 根据班级 ID 获取班级信息
    pub async fn get_classroom(
        &self,
        request: &HttpRequest,
        scope: ScopePath,
        classroom_id: String,
    ) -> ActixResult<HttpResponse> {
        get::get_classroom(self, request, scope, classroom_id).await
    }

    // 更新班级信息
    pub async fn update_classroom(
        &self,
        request: &HttpRequest,
        scope: ScopePath,
        classroom_id: String,
        update_data: UpdateClassroomRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_classroom(self, request, scope, classroom_id, update_data).await
    }

    // 根据班级 ID 删除班级
    pub async fn delete_classroom(
        &self,
        request: &HttpRequest,
        scope: ScopePath,
        classroom_id: String,
    ) -> ActixResult<HttpResponse> {
        delete::delete_classroom(self, request, scope, classroom_id).await
    }

    // 批量删除班级
    pub async fn bulk_delete_classrooms(
        &self,
        request: &HttpRequest,
        scope: ScopePath,
        delete_data: BulkDeleteRequest,
    ) -> ActixResult<HttpResponse> {
        delete::bulk_delete_classrooms(self, request, scope, delete_data).await
    }

    // 分配学生进班
    pub async fn assign_students(
        &self,
        request: &HttpRequest,
        scope: ScopePath,
        classroom_id: String,
        assign_data: AssignStudentsRequest,
    ) -> ActixResult<HttpResponse> {
        students::assign_students(self, request, scope, classroom_id, assign_data).await
    }

    // 将学生移出班级
    pub async fn remove_student(
        &self,
        request: &HttpRequest,
        scope: ScopePath,
        classroom_id: String,
        student_id: String,
    ) -> ActixResult<HttpResponse> {
        students::remove_student(self, request, scope, classroom_id, student_id).await
    }

    // 列出班级成员
    pub async fn list_classroom_students(
        &self,
        request: &HttpRequest,
        scope: ScopePath,
        classroom_id: String,
        query: StudentQueryParams,
    ) -> ActixResult<HttpResponse> {
        students::list_classroom_students(self, request, scope, classroom_id, query).await
    }
}
