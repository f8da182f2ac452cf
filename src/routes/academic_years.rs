use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::academic_years::requests::{
    AcademicYearQueryParams, CreateAcademicYearRequest, UpdateAcademicYearRequest,
};
use crate::models::common::BulkDeleteRequest;
use crate::services::AcademicYearService;
use crate::utils::SafeAcademicYearId;

// 懒加载的全局 ACADEMIC_YEAR_SERVICE 实例
static ACADEMIC_YEAR_SERVICE: Lazy<AcademicYearService> = Lazy::new(AcademicYearService::new_lazy);

// HTTP处理程序
pub async fn list_academic_years(
    req: HttpRequest,
    query: web::Query<AcademicYearQueryParams>,
) -> ActixResult<HttpResponse> {
    ACADEMIC_YEAR_SERVICE
        .list_academic_years(&req, query.into_inner())
        .await
}

pub async fn create_academic_year(
    req: HttpRequest,
    year_data: web::Json<CreateAcademicYearRequest>,
) -> ActixResult<HttpResponse> {
    ACADEMIC_YEAR_SERVICE
        .create_academic_year(&req, year_data.into_inner())
        .await
}

pub async fn get_academic_year(
    req: HttpRequest,
    year_id: SafeAcademicYearId,
) -> ActixResult<HttpResponse> {
    ACADEMIC_YEAR_SERVICE.get_academic_year(&req, year_id.0).await
}

pub async fn update_academic_year(
    req: HttpRequest,
    year_id: SafeAcademicYearId,
    update_data: web::Json<UpdateAcademicYearRequest>,
) -> ActixResult<HttpResponse> {
    ACADEMIC_YEAR_SERVICE
        .update_academic_year(&req, year_id.0, update_data.into_inner())
        .await
}

pub async fn delete_academic_year(
    req: HttpRequest,
    year_id: SafeAcademicYearId,
) -> ActixResult<HttpResponse> {
    ACADEMIC_YEAR_SERVICE
        .delete_academic_year(&req, year_id.0)
        .await
}

pub async fn bulk_delete_academic_years(
    req: HttpRequest,
    delete_data: web::Json<BulkDeleteRequest>,
) -> ActixResult<HttpResponse> {
    ACADEMIC_YEAR_SERVICE
        .bulk_delete_academic_years(&req, delete_data.into_inner())
        .await
}

// 配置路由
pub fn configure_academic_year_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/academic-years")
            .service(
                web::resource("")
                    .route(web::get().to(list_academic_years))
                    .route(web::post().to(create_academic_year)),
            )
            // 字面量路径先于 {academic_year_id} 注册
            .service(
                web::resource("/bulk-delete").route(web::post().to(bulk_delete_academic_years)),
            )
            .service(
                web::resource("/{academic_year_id}")
                    .route(web::get().to(get_academic_year))
                    .route(web::put().to(update_academic_year))
                    .route(web::delete().to(delete_academic_year)),
            ),
    );
}
