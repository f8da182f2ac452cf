pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod scores;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::error;

use crate::models::common::BulkDeleteRequest;
use crate::models::summatives::requests::{
    CreateSummativeRequest, SummativeQueryParams, UpdateSummativeRequest, UpsertScoresRequest,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::resolve_scope;
use crate::storage::Storage;

// 评价路由的路径参数 (school_id, say_id, subject_id)
pub type SubjectScopePath = (String, String, String);

pub struct SummativeService {
    storage: Option<Arc<dyn Storage>>,
}

impl SummativeService {
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

    // 获取评价列表
    pub async fn list_summatives(
        &self,
        request: &HttpRequest,
        scope: SubjectScopePath,
        query: SummativeQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_summatives(self, request, scope, query).await
    }

    // 创建评价
    pub async fn create_summative(
        &self,
        request: &HttpRequest,
        scope: SubjectScopePath,
        summative_data: CreateSummativeRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_summative(self, request, scope, summative_data).await
    }

    // 根据评价 ID 获取评价信息
    pub async fn get_summative(
        &self,
        request: &HttpRequest,
        scope: SubjectScopePath,
        summative_id: String,
    ) -> ActixResult<HttpResponse> {
        get::get_summative(self, request, scope, summative_id).await
    }

    // 更新评价信息
    pub async fn update_summative(
        &self,
        request: &HttpRequest,
        scope: SubjectScopePath,
        summative_id: String,
        update_data: UpdateSummativeRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_summative(self, request, scope, summative_id, update_data).await
    }

    // 根据评价 ID 删除评价
    pub async fn delete_summative(
        &self,
        request: &HttpRequest,
        scope: SubjectScopePath,
        summative_id: String,
    ) -> ActixResult<HttpResponse> {
        delete::delete_summative(self, request, scope, summative_id).await
    }

    // 批量删除评价
    pub async fn bulk_delete_summatives(
        &self,
        request: &HttpRequest,
        scope: SubjectScopePath,
        delete_data: BulkDeleteRequest,
    ) -> ActixResult<HttpResponse> {
        delete::bulk_delete_summatives(self, request, scope, delete_data).await
    }

    // 批量录入/更新成绩
    pub async fn upsert_scores(
        &self,
        request: &HttpRequest,
        scope: SubjectScopePath,
        summative_id: String,
        scores_data: UpsertScoresRequest,
    ) -> ActixResult<HttpResponse> {
        scores::upsert_scores(self, request, scope, summative_id, scores_data).await
    }

    // 列出评价的成绩
    pub async fn list_scores(
        &self,
        request: &HttpRequest,
        scope: SubjectScopePath,
        summative_id: String,
    ) -> ActixResult<HttpResponse> {
        scores::list_scores(self, request, scope, summative_id).await
    }
}

/// 作用域校验辅助函数
///
/// 学校学年属于学校、科目属于学校学年，两级都校验。
pub(crate) async fn resolve_subject_scope(
    storage: &Arc<dyn Storage>,
    school_id: &str,
    say_id: &str,
    subject_id: &str,
) -> Result<(), HttpResponse> {
    resolve_scope(storage, school_id, say_id).await?;

    match storage.get_subject(say_id, subject_id).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubjectNotFound,
            "Subject not found in this academic year",
        ))),
        Err(e) => {
            error!("Failed to resolve subject scope: {}", e);
            Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while resolving subject scope",
                )),
            )
        }
    }
}
