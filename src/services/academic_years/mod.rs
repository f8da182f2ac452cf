pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::academic_years::requests::{
    AcademicYearQueryParams, CreateAcademicYearRequest, UpdateAcademicYearRequest,
};
use crate::models::common::BulkDeleteRequest;
use crate::storage::Storage;

pub struct AcademicYearService {
    storage: Option<Arc<dyn Storage>>,
}

impl AcademicYearService {
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

    // 获取学年列表
    pub async fn list_academic_years(
        &self,
        request: &HttpRequest,
        query: AcademicYearQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_academic_years(self, request, query).await
    }

    // 创建学年
    pub async fn create_academic_year(
        &self,
        request: &HttpRequest,
        year_data: CreateAcademicYearRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_academic_year(self, request, year_data).await
    }

    // 根据学年 ID 获取学年信息
    pub async fn get_academic_year(
        &self,
        request: &HttpRequest,
        year_id: String,
    ) -> ActixResult<HttpResponse> {
        get::get_academic_year(self, request, year_id).await
    }

    // 更新学年信息
    pub async fn update_academic_year(
        &self,
        request: &HttpRequest,
        year_id: String,
        update_data: UpdateAcademicYearRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_academic_year(self, request, year_id, update_data).await
    }

    // 根据学年 ID 删除学年
    pub async fn delete_academic_year(
        &self,
        request: &HttpRequest,
        year_id: String,
    ) -> ActixResult<HttpResponse> {
        delete::delete_academic_year(self, request, year_id).await
    }

    // 批量删除学年
    pub async fn bulk_delete_academic_years(
        &self,
        request: &HttpRequest,
        delete_data: BulkDeleteRequest,
    ) -> ActixResult<HttpResponse> {
        delete::bulk_delete_academic_years(self, request, delete_data).await
    }
}
