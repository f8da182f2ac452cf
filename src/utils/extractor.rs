//! 路径参数安全提取器
//!
//! 在进入处理函数前校验路径中的主键形态，非法主键直接返回统一的
//! 400 响应，处理函数里拿到的永远是形态合法的 ID。

use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, HttpResponse};

use crate::models::{ApiResponse, ErrorCode};
use crate::utils::ids::is_valid_id;

fn invalid_id_error(param: &str) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        format!("Invalid path parameter: {param}"),
    ));
    actix_web::error::InternalError::from_response("invalid path parameter", response).into()
}

/// 定义一个按路径参数名提取并校验主键的提取器
macro_rules! define_id_extractor {
    ($(
        $name:ident($param:literal)
    ),* $(,)?) => {
        $(
            pub struct $name(pub String);

            impl FromRequest for $name {
                type Error = actix_web::Error;
                type Future = Ready<Result<Self, Self::Error>>;

                fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                    let value = req.match_info().get($param).unwrap_or_default();
                    if is_valid_id(value) {
                        ready(Ok($name(value.to_string())))
                    } else {
                        ready(Err(invalid_id_error($param)))
                    }
                }
            }
        )*
    };
}

define_id_extractor! {
    SafeSchoolId("school_id"),
    SafeAcademicYearId("academic_year_id"),
    SafeSchoolAcademicYearId("say_id"),
    SafeTeacherId("teacher_id"),
    SafeClassroomId("classroom_id"),
    SafeStudentId("student_id"),
    SafeSubjectId("subject_id"),
    SafeSummativeId("summative_id"),
}
