pub mod activate;
pub mod attach;
pub mod detach;
pub mod list;
pub mod options;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::models::school_academic_years::requests::{
    AttachAcademicYearRequest, SchoolAcademicYearQueryParams,
};
use crate::storage::Storage;

pub struct SchoolAcademicYearService {
    storage: Option<Arc<dyn Storage>>,
}

impl SchoolAcademicYearService {
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

    pub(crate) fn get_cache(&self, request: &HttpRequest) -> Arc<dyn ObjectCache> {
        request
            .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
            .expect("Cache not found in app data")
            .get_ref()
            .clone()
    }

    // 登录下拉框选项的缓存键
    pub(crate) fn options_cache_key(school_id: &str) -> String {
        format!("academic_year_options:{school_id}")
    }

    // 列出学校挂接的学年
    pub async fn list_school_academic_years(
        &self,
        request: &HttpRequest,
        school_id: String,
        query: SchoolAcademicYearQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_school_academic_years(self, request, school_id, query).await
    }

    // 为学校挂接学年
    pub async fn attach_academic_year(
        &self,
        request: &HttpRequest,
        school_id: String,
        attach_data: AttachAcademicYearRequest,
    ) -> ActixResult<HttpResponse> {
        attach::attach_academic_year(self, request, school_id, attach_data).await
    }

    // 获取学校学年详情
    pub async fn get_school_academic_year(
        &self,
        request: &HttpRequest,
        school_id: String,
        say_id: String,
    ) -> ActixResult<HttpResponse> {
        list::get_school_academic_year(self, request, school_id, say_id).await
    }

    // 登录下拉框的学年选项
    pub async fn list_academic_year_options(
        &self,
        request: &HttpRequest,
        school_id: String,
    ) -> ActixResult<HttpResponse> {
        options::list_academic_year_options(self, request, school_id).await
    }

    // 启用某学年
    pub async fn activate_school_academic_year(
        &self,
        request: &HttpRequest,
        school_id: String,
        say_id: String,
    ) -> ActixResult<HttpResponse> {
        activate::activate_school_academic_year(self, request, school_id, say_id).await
    }

    // 解除学校与学年的挂接
    pub async fn detach_academic_year(
        &self,
        request: &HttpRequest,
        school_id: String,
        say_id: String,
    ) -> ActixResult<HttpResponse> {
        detach::detach_academic_year(self, request, school_id, say_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_cache_key() {
        assert_eq!(
            SchoolAcademicYearService::options_cache_key("abc123"),
            "academic_year_options:abc123"
        );
    }
}
