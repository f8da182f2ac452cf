use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::common::BulkDeleteRequest;
use crate::models::schools::requests::{
    CreateSchoolRequest, SchoolQueryParams, UpdateSchoolRequest,
};
use crate::services::SchoolService;
use crate::utils::SafeSchoolId;

// 懒加载的全局 SCHOOL_SERVICE 实例
static SCHOOL_SERVICE: Lazy<SchoolService> = Lazy::new(SchoolService::new_lazy);

// HTTP处理程序
pub async fn list_schools(
    req: HttpRequest,
    query: web::Query<SchoolQueryParams>,
) -> ActixResult<HttpResponse> {
    SCHOOL_SERVICE.list_schools(&req, query.into_inner()).await
}

pub async fn create_school(
    req: HttpRequest,
    school_data: web::Json<CreateSchoolRequest>,
) -> ActixResult<HttpResponse> {
    SCHOOL_SERVICE
        .create_school(&req, school_data.into_inner())
        .await
}

pub async fn get_school(req: HttpRequest, school_id: SafeSchoolId) -> ActixResult<HttpResponse> {
    SCHOOL_SERVICE.get_school(&req, school_id.0).await
}

pub async fn update_school(
    req: HttpRequest,
    school_id: SafeSchoolId,
    update_data: web::Json<UpdateSchoolRequest>,
) -> ActixResult<HttpResponse> {
    SCHOOL_SERVICE
        .update_school(&req, school_id.0, update_data.into_inner())
        .await
}

pub async fn delete_school(req: HttpRequest, school_id: SafeSchoolId) -> ActixResult<HttpResponse> {
    SCHOOL_SERVICE.delete_school(&req, school_id.0).await
}

pub async fn bulk_delete_schools(
    req: HttpRequest,
    delete_data: web::Json<BulkDeleteRequest>,
) -> ActixResult<HttpResponse> {
    SCHOOL_SERVICE
        .bulk_delete_schools(&req, delete_data.into_inner())
        .await
}

// 配置路由
pub fn configure_school_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/schools")
            .service(
                web::resource("")
                    .route(web::get().to(list_schools))
                    .route(web::post().to(create_school)),
            )
            // 字面量路径先于 {school_id} 注册
            .service(web::resource("/bulk-delete").route(web::post().to(bulk_delete_schools)))
            .service(
                web::resource("/{school_id}")
                    .route(web::get().to(get_school))
                    .route(web::put().to(update_school))
                    .route(web::delete().to(delete_school)),
            ),
    );
}
