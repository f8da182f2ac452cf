//! 班级成绩汇总（XLSX）

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Utc;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tracing::error;

use super::aggregate::{average_by_student_subject, is_passing, round2};
use super::{ReportService, ScopePath};
use crate::models::classrooms::entities::Classroom;
use crate::models::students::entities::Student;
use crate::models::students::requests::StudentListQuery;
use crate::models::subjects::entities::Subject;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::resolve_scope;

/// 导出班级成绩汇总报表
pub async fn classroom_recap(
    service: &ReportService,
    request: &HttpRequest,
    (school_id, say_id): ScopePath,
    classroom_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = resolve_scope(&storage, &school_id, &say_id).await {
        return Ok(resp);
    }

    // 班级必须属于该作用域
    let classroom = match storage.get_classroom(&say_id, &classroom_id).await {
        Ok(Some(classroom)) => classroom,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassroomNotFound,
                "Classroom not found",
            )));
        }
        Err(e) => {
            error!("Failed to get classroom by id: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching classroom",
                )),
            );
        }
    };

    // 班级全部成员（不分页，取全部）
    let members_query = StudentListQuery {
        page: Some(1),
        size: Some(100),
        search: None,
        gender: None,
        religion: None,
        classroom_id: None,
        sort: None,
    };

    let mut students = Vec::new();
    let mut page = 1i64;
    loop {
        let mut query = members_query.clone();
        query.page = Some(page);
        let response = match storage
            .list_classroom_students_with_pagination(&classroom_id, query)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!("Failed to list classroom students: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to list classroom students: {e}"),
                    )),
                );
            }
        };
        let total_pages = response.pagination.total_pages;
        students.extend(response.items);
        if page >= total_pages {
            break;
        }
        page += 1;
    }

    let subjects = match storage.list_subjects_all(&say_id).await {
        Ok(subjects) => subjects,
        Err(e) => {
            error!("Failed to list subjects: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list subjects: {e}"),
                )),
            );
        }
    };

    let student_ids: Vec<String> = students.iter().map(|s| s.id.clone()).collect();
    let score_rows = match storage.list_students_score_rows(&student_ids).await {
        Ok(rows) => rows,
        Err(e) => {
            error!("Failed to list classroom score rows: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list classroom scores: {e}"),
                )),
            );
        }
    };

    match generate_recap_xlsx(&classroom, &students, &subjects, &score_rows) {
        Ok(buffer) => {
            let timestamp = Utc::now().format("%Y%m%d_%H%M%S").to_string();
            let filename = format!("classroom_{}_recap_{timestamp}.xlsx", classroom.name);

            Ok(HttpResponse::Ok()
                .content_type("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
                .insert_header((
                    "Content-Disposition",
                    format!("attachment; filename=\"{filename}\""),
                ))
                .body(buffer))
        }
        Err(e) => {
            error!("生成班级汇总失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ReportGenerationFailed,
                    format!("生成班级汇总失败: {e}"),
                )),
            )
        }
    }
}

/// 生成 XLSX 文件
fn generate_recap_xlsx(
    classroom: &Classroom,
    students: &[Student],
    subjects: &[Subject],
    score_rows: &[(String, String, f64)],
) -> Result<Vec<u8>, String> {
    let averages = average_by_student_subject(score_rows);

    let mut workbook = Workbook::new();

    // 格式定义
    let header_format = Format::new().set_bold();
    let title_format = Format::new().set_bold().set_font_size(14);

    // Sheet 1: 汇总
    let sheet1 = workbook
        .add_worksheet()
        .set_name("Ringkasan")
        .map_err(|e| e.to_string())?;
    write_summary_sheet(
        sheet1,
        &header_format,
        &title_format,
        classroom,
        students,
        subjects,
        &averages,
    )?;

    // Sheet 2: 明细矩阵（学生 × 科目）
    let sheet2 = workbook
        .add_worksheet()
        .set_name("Nilai")
        .map_err(|e| e.to_string())?;
    write_detail_sheet(sheet2, &header_format, students, subjects, &averages)?;

    workbook.save_to_buffer().map_err(|e| e.to_string())
}

/// 写入汇总 Sheet
fn write_summary_sheet(
    sheet: &mut Worksheet,
    header_format: &Format,
    title_format: &Format,
    classroom: &Classroom,
    students: &[Student],
    subjects: &[Subject],
    averages: &std::collections::HashMap<String, std::collections::HashMap<String, f64>>,
) -> Result<(), String> {
    // 标题
    sheet
        .write_string_with_format(0, 0, "Rekap Nilai Kelas", title_format)
        .map_err(|e| e.to_string())?;

    sheet.write_string(2, 0, "Kelas").ok();
    sheet.write_string(2, 1, &classroom.name).ok();
    sheet.write_string(3, 0, "Wali Kelas").ok();
    sheet
        .write_string(
            3,
            1,
            classroom.homeroom_teacher_name.as_deref().unwrap_or("-"),
        )
        .ok();
    sheet.write_string(4, 0, "Jumlah Siswa").ok();
    sheet.write_number(4, 1, students.len() as f64).ok();

    // 各科目的班级均分与及格人数
    sheet
        .write_string_with_format(6, 0, "Mata Pelajaran", header_format)
        .map_err(|e| e.to_string())?;
    sheet
        .write_string_with_format(6, 1, "KKM", header_format)
        .map_err(|e| e.to_string())?;
    sheet
        .write_string_with_format(6, 2, "Rata-rata Kelas", header_format)
        .map_err(|e| e.to_string())?;
    sheet
        .write_string_with_format(6, 3, "Tuntas", header_format)
        .map_err(|e| e.to_string())?;

    for (index, subject) in subjects.iter().enumerate() {
        let row = (index + 7) as u32;

        let mut values = Vec::new();
        let mut passing = 0i64;
        for student in students {
            if let Some(&average) = averages
                .get(&student.id)
                .and_then(|per_subject| per_subject.get(&subject.id))
            {
                values.push(average);
                if is_passing(average, subject.passing_grade) {
                    passing += 1;
                }
            }
        }

        sheet.write_string(row, 0, &subject.name).ok();
        sheet.write_number(row, 1, subject.passing_grade).ok();

        if values.is_empty() {
            sheet.write_string(row, 2, "-").ok();
        } else {
            let class_average = round2(values.iter().sum::<f64>() / values.len() as f64);
            sheet.write_number(row, 2, class_average).ok();
        }
        sheet.write_number(row, 3, passing as f64).ok();
    }

    // 设置列宽
    sheet.set_column_width(0, 25).ok();
    sheet.set_column_width(1, 10).ok();
    sheet.set_column_width(2, 16).ok();
    sheet.set_column_width(3, 10).ok();

    Ok(())
}

/// 写入明细 Sheet
fn write_detail_sheet(
    sheet: &mut Worksheet,
    header_format: &Format,
    students: &[Student],
    subjects: &[Subject],
    averages: &std::collections::HashMap<String, std::collections::HashMap<String, f64>>,
) -> Result<(), String> {
    // 表头：NISN、姓名、各科目
    sheet
        .write_string_with_format(0, 0, "NISN", header_format)
        .map_err(|e| e.to_string())?;
    sheet
        .write_string_with_format(0, 1, "Nama", header_format)
        .map_err(|e| e.to_string())?;
    for (col, subject) in subjects.iter().enumerate() {
        sheet
            .write_string_with_format(0, (col + 2) as u16, &subject.name, header_format)
            .map_err(|e| e.to_string())?;
    }

    // 数据
    for (row, student) in students.iter().enumerate() {
        let row = (row + 1) as u32;
        sheet.write_string(row, 0, &student.nisn).ok();
        sheet.write_string(row, 1, &student.name).ok();

        for (col, subject) in subjects.iter().enumerate() {
            let col = (col + 2) as u16;
            match averages
                .get(&student.id)
                .and_then(|per_subject| per_subject.get(&subject.id))
            {
                Some(&average) => {
                    sheet.write_number(row, col, average).ok();
                }
                None => {
                    sheet.write_string(row, col, "-").ok();
                }
            }
        }
    }

    // 设置列宽
    sheet.set_column_width(0, 14).ok();
    sheet.set_column_width(1, 25).ok();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::common::Gender;
    use chrono::Utc;

    fn sample_classroom() -> Classroom {
        Classroom {
            id: "c1".to_string(),
            school_academic_year_id: "say1".to_string(),
            name: "VII-A".to_string(),
            grade_level: 7,
            homeroom_teacher_id: None,
            homeroom_teacher_name: Some("Siti Aminah".to_string()),
            student_count: Some(2),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sample_student(id: &str, nisn: &str, name: &str) -> Student {
        Student {
            id: id.to_string(),
            school_academic_year_id: "say1".to_string(),
            nisn: nisn.to_string(),
            name: name.to_string(),
            gender: Gender::Female,
            birth_place: None,
            birth_date: None,
            religion: None,
            address: None,
            parent: None,
            guardian: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sample_subject(id: &str, name: &str) -> Subject {
        Subject {
            id: id.to_string(),
            school_academic_year_id: "say1".to_string(),
            teacher_id: None,
            teacher_name: None,
            name: name.to_string(),
            code: None,
            passing_grade: 70.0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_generate_recap_xlsx() {
        let students = vec![
            sample_student("s1", "0051234567", "Budi"),
            sample_student("s2", "0051234568", "Ani"),
        ];
        let subjects = vec![sample_subject("math", "Matematika")];
        let rows = vec![
            ("s1".to_string(), "math".to_string(), 80.0),
            ("s2".to_string(), "math".to_string(), 60.0),
        ];

        let buffer =
            generate_recap_xlsx(&sample_classroom(), &students, &subjects, &rows).unwrap();
        assert_eq!(&buffer[0..2], b"PK");
    }

    #[test]
    fn test_generate_recap_xlsx_empty_classroom() {
        // 零学生零科目也要能产出带表头的工作簿
        let buffer = generate_recap_xlsx(&sample_classroom(), &[], &[], &[]).unwrap();
        assert_eq!(&buffer[0..2], b"PK");
    }
}
