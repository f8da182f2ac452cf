pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::common::BulkDeleteRequest;
use crate::models::schools::requests::{
    CreateSchoolRequest, SchoolQueryParams, UpdateSchoolRequest,
};
use crate::storage::Storage;

pub struct SchoolService {
    storage: Option<Arc<dyn Storage>>,
}

impl SchoolService {
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

    // 获取学校列表
    pub async fn list_schools(
        &self,
        request: &HttpRequest,
        query: SchoolQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_schools(self, request, query).await
    }

    // 创建学校
    pub async fn create_school(
        &self,
        request: &HttpRequest,
        school_data: CreateSchoolRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_school(self, request, school_data).await
    }

    // 根据学校 ID 获取学校信息
    pub async fn get_school(
        &self,
        request: &HttpRequest,
        school_id: String,
    ) -> ActixResult<HttpResponse> {
        get::get_school(self, request, school_id).await
    }

    // 更新学校信息
    pub async fn update_school(
        &self,
        request: &HttpRequest,
        school_id: String,
        update_data: UpdateSchoolRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_school(self, request, school_id, update_data).await
    }

    // 根据学校 ID 删除学校
    pub async fn delete_school(
        &self,
        request: &HttpRequest,
        school_id: String,
    ) -> ActixResult<HttpResponse> {
        delete::delete_school(self, request, school_id).await
    }

    // 批量删除学校
    pub async fn bulk_delete_schools(
        &self,
        request: &HttpRequest,
        delete_data: BulkDeleteRequest,
    ) -> ActixResult<HttpResponse> {
        delete::bulk_delete_schools(self, request, delete_data).await
    }
}
