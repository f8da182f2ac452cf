pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::common::BulkDeleteRequest;
use crate::models::subjects::requests::{
    CreateSubjectRequest, SubjectQueryParams, UpdateSubjectRequest,
};
use crate::storage::Storage;

// 作用域内资源的路径参数 (school_id, say_id)
pub type ScopePath = (String, String);

pub struct SubjectService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubjectService {
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

    // 获取科目列表
    pub async fn list_subjects(
        &self,
        request: &HttpRequest,
        scope: ScopePath,
        query: SubjectQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_subjects(self, request, scope, query).await
    }

    // 创建科目
    pub async fn create_subject(
        &self,
        request: &HttpRequest,
        scope: ScopePath,
        subject_data: CreateSubjectRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_subject(self, request, scope, subject_data).await
    }

    // 根据科目 ID 获取科目信息
    pub async fn get_subject(
        &self,
        request: &HttpRequest,
        scope: ScopePath,
        subject_id: String,
    ) -> ActixResult<HttpResponse> {
        get::get_subject(self, request, scope, subject_id).await
    }

    // 更新科目信息
    pub async fn update_subject(
        &self,
        request: &HttpRequest,
        scope: ScopePath,
        subject_id: String,
        update_data: UpdateSubjectRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_subject(self, request, scope, subject_id, update_data).await
    }

    // 根据科目 ID 删除科目
    pub async fn delete_subject(
        &self,
        request: &HttpRequest,
        scope: ScopePath,
        subject_id: String,
    ) -> ActixResult<HttpResponse> {
        delete::delete_subject(self, request, scope, subject_id).await
    }

    // 批量删除科目
    pub async fn bulk_delete_subjects(
        &self,
        request: &HttpRequest,
        scope: ScopePath,
        delete_data: BulkDeleteRequest,
    ) -> ActixResult<HttpResponse> {
        delete::bulk_delete_subjects(self, request, scope, delete_data).await
    }
}
