pub mod create;
pub mod delete;
pub mod export;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::common::BulkDeleteRequest;
use crate::models::students::requests::{
    CreateStudentRequest, StudentExportParams, StudentQueryParams, UpdateStudentRequest,
};
use crate::storage::Storage;

// 作用域内资源的路径参数 (school_id, say_id)
pub type ScopePath = (String, String);

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
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

    // 获取学生列表
    pub async fn list_students(
        &self,
        request: &HttpRequest,
        scope: ScopePath,
        query: StudentQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_students(self, request, scope, query).await
    }

    // 创建学生
    pub async fn create_student(
        &self,
        request: &HttpRequest,
        scope: ScopePath,
        student_data: CreateStudentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_student(self, request, scope, student_data).await
    }

    // 根据学生 ID 获取学生信息
    pub async fn get_student(
        &self,
        request: &HttpRequest,
        scope: ScopePath,
        student_id: String,
    ) -> ActixResult<HttpResponse> {
        get::get_student(self, request, scope, student_id).await
    }

    // 更新学生信息
    pub async fn update_student(
        &self,
        request: &HttpRequest,
        scope: ScopePath,
        student_id: String,
        update_data: UpdateStudentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_student(self, request, scope, student_id, update_data).await
    }

    // 根据学生 ID 删除学生
    pub async fn delete_student(
        &self,
        request: &HttpRequest,
        scope: ScopePath,
        student_id: String,
    ) -> ActixResult<HttpResponse> {
        delete::delete_student(self, request, scope, student_id).await
    }

    // 批量删除学生
    pub async fn bulk_delete_students(
        &self,
        request: &HttpRequest,
        scope: ScopePath,
        delete_data: BulkDeleteRequest,
    ) -> ActixResult<HttpResponse> {
        delete::bulk_delete_students(self, request, scope, delete_data).await
    }

    // 导出学生列表
    pub async fn export_students(
        &self,
        request: &HttpRequest,
        scope: ScopePath,
        params: StudentExportParams,
    ) -> ActixResult<HttpResponse> {
        export::export_students(self, request, scope, params).await
    }
}
