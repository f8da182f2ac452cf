//! 学生导出服务

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use rust_xlsxwriter::{Format, Workbook};
use tracing::error;

use super::{ScopePath, StudentService};
use crate::config::AppConfig;
use crate::models::students::entities::Student;
use crate::models::students::requests::StudentExportParams;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::resolve_scope;

/// 导出学生列表
pub async fn export_students(
    service: &StudentService,
    request: &HttpRequest,
    (school_id, say_id): ScopePath,
    params: StudentExportParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = resolve_scope(&storage, &school_id, &say_id).await {
        return Ok(resp);
    }

    let limit = AppConfig::get().report.export_row_limit;

    let students = match storage
        .list_students_for_export_filtered(
            &say_id,
            limit,
            params.gender,
            params.classroom_id,
            params.search.as_deref(),
        )
        .await
    {
        Ok(students) => students,
        Err(e) => {
            error!("导出学生失败: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("导出学生失败: {e}"),
                )),
            );
        }
    };

    match params.format.as_str() {
        "xlsx" => export_xlsx(&students),
        _ => export_csv(&students),
    }
}

fn export_csv(students: &[Student]) -> ActixResult<HttpResponse> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    // 写入表头
    wtr.write_record([
        "nisn",
        "name",
        "gender",
        "birth_place",
        "birth_date",
        "religion",
        "address",
        "created_at",
    ])
    .map_err(|e| {
        error!("CSV 写入失败: {}", e);
        actix_web::error::ErrorInternalServerError(format!("CSV 写入失败: {e}"))
    })?;

    // 写入数据
    for student in students {
        wtr.write_record([
            student.nisn.clone(),
            student.name.clone(),
            student.gender.to_string(),
            student.birth_place.clone().unwrap_or_default(),
            student.birth_date.clone().unwrap_or_default(),
            student.religion.clone().unwrap_or_default(),
            student.address.clone().unwrap_or_default(),
            student.created_at.to_rfc3339(),
        ])
        .map_err(|e| {
            error!("CSV 写入失败: {}", e);
            actix_web::error::ErrorInternalServerError(format!("CSV 写入失败: {e}"))
        })?;
    }

    let data = wtr.into_inner().map_err(|e| {
        error!("CSV 生成失败: {}", e);
        actix_web::error::ErrorInternalServerError(format!("CSV 生成失败: {e}"))
    })?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header(("Content-Disposition", "attachment; filename=\"students.csv\""))
        .body(data))
}

fn export_xlsx(students: &[Student]) -> ActixResult<HttpResponse> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // 表头格式
    let header_format = Format::new().set_bold();

    // 写入表头
    let headers = [
        "NISN",
        "姓名",
        "性别",
        "出生地",
        "出生日期",
        "宗教",
        "住址",
        "创建时间",
    ];
    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| {
                error!("XLSX 写入失败: {}", e);
                actix_web::error::ErrorInternalServerError(format!("XLSX 写入失败: {e}"))
            })?;
    }

    // 写入数据
    for (row, student) in students.iter().enumerate() {
        let row = (row + 1) as u32;
        worksheet.write_string(row, 0, &student.nisn).ok();
        worksheet.write_string(row, 1, &student.name).ok();
        worksheet
            .write_string(row, 2, student.gender.to_string())
            .ok();
        worksheet
            .write_string(row, 3, student.birth_place.as_deref().unwrap_or(""))
            .ok();
        worksheet
            .write_string(row, 4, student.birth_date.as_deref().unwrap_or(""))
            .ok();
        worksheet
            .write_string(row, 5, student.religion.as_deref().unwrap_or(""))
            .ok();
        worksheet
            .write_string(row, 6, student.address.as_deref().unwrap_or(""))
            .ok();
        worksheet
            .write_string(row, 7, student.created_at.to_rfc3339())
            .ok();
    }

    // 生成二进制数据
    let buffer = workbook.save_to_buffer().map_err(|e| {
        error!("XLSX 生成失败: {}", e);
        actix_web::error::ErrorInternalServerError(format!("XLSX 生成失败: {e}"))
    })?;

    Ok(HttpResponse::Ok()
        .content_type("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
        .insert_header((
            "Content-Disposition",
            "attachment; filename=\"students.xlsx\"",
        ))
        .body(buffer))
}
