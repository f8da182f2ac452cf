pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::common::BulkDeleteRequest;
use crate::models::teachers::requests::{
    CreateTeacherRequest, TeacherQueryParams, UpdateTeacherRequest,
};
use crate::storage::Storage;

// 作用域内资源的路径参数 (school_id, say_id)
pub type ScopePath = (String, String);

pub struct TeacherService {
    storage: Option<Arc<dyn Storage>>,
}

impl TeacherService {
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

    // 获取教师列表
    pub async fn list_teachers(
        &self,
        request: &HttpRequest,
        scope: ScopePath,
        query: TeacherQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_teachers(self, request, scope, query).await
    }

    // 创建教师
    pub async fn create_teacher(
        &self,
        request: &HttpRequest,
        scope: ScopePath,
        teacher_data: CreateTeacherRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_teacher(self, request, scope, teacher_data).await
    }

    // 根据教师 ID 获取教师信息
    pub async fn get_teacher(
        &self,
        request: &HttpRequest,
        scope: ScopePath,
        teacher_id: String,
    ) -> ActixResult<HttpResponse> {
        get::get_teacher(self, request, scope, teacher_id).await
    }

    // 更新教师信息
    pub async fn update_teacher(
        &self,
        request: &HttpRequest,
        scope: ScopePath,
        teacher_id: String,
        update_data: UpdateTeacherRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_teacher(self, request, scope, teacher_id, update_data).await
    }

    // 根据教师 ID 删除教师
    pub async fn delete_teacher(
        &self,
        request: &HttpRequest,
        scope: ScopePath,
        teacher_id: String,
    ) -> ActixResult<HttpResponse> {
        delete::delete_teacher(self, request, scope, teacher_id).await
    }

    // 批量删除教师
    pub async fn bulk_delete_teachers(
        &self,
        request: &HttpRequest,
        scope: ScopePath,
        delete_data: BulkDeleteRequest,
    ) -> ActixResult<HttpResponse> {
        delete::bulk_delete_teachers(self, request, scope, delete_data).await
    }
}
