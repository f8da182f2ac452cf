pub mod aggregate;
pub mod classroom_recap;
pub mod report_card;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

// 作用域内资源的路径参数 (school_id, say_id)
pub type ScopePath = (String, String);

pub struct ReportService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReportService {
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

    // 生成学生成绩报告书（Word）
    pub async fn student_report_card(
        &self,
        request: &HttpRequest,
        scope: ScopePath,
        student_id: String,
    ) -> ActixResult<HttpResponse> {
        report_card::student_report_card(self, request, scope, student_id).await
    }

    // 生成班级成绩汇总（XLSX）
    pub async fn classroom_recap(
        &self,
        request: &HttpRequest,
        scope: ScopePath,
        classroom_id: String,
    ) -> ActixResult<HttpResponse> {
        classroom_recap::classroom_recap(self, request, scope, classroom_id).await
    }
}
