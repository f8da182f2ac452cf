//! 学生成绩报告书（Word）
//!
//! 以程序化拼装的方式生成 docx：身份信息、家长/监护人信息、
//! 各科目总结性评价平均分与及格判定。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use docx_rs::{AlignmentType, Docx, Paragraph, Run, Table, TableCell, TableRow};
use tracing::error;

use super::aggregate::{average_by_subject, is_passing};
use super::{ReportService, ScopePath};
use crate::config::AppConfig;
use crate::models::students::entities::Student;
use crate::models::subjects::entities::Subject;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::resolve_scope;

pub async fn student_report_card(
    service: &ReportService,
    request: &HttpRequest,
    (school_id, say_id): ScopePath,
    student_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let say = match resolve_scope(&storage, &school_id, &say_id).await {
        Ok(say) => say,
        Err(resp) => return Ok(resp),
    };

    // 学生（含家长/监护人信息）
    let student = match storage.get_student(&say_id, &student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            error!("Failed to get student by id: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching student",
                )),
            );
        }
    };

    // 学校抬头
    let school = match storage.get_school_by_id(&school_id).await {
        Ok(Some(school)) => school,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SchoolNotFound,
                "School not found",
            )));
        }
        Err(e) => {
            error!("Failed to get school by id: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching school",
                )),
            );
        }
    };

    // 作用域内全部科目 + 该生全部成绩行
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

    let score_rows = match storage.list_student_score_rows(&student_id).await {
        Ok(rows) => rows,
        Err(e) => {
            error!("Failed to list student score rows: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list student scores: {e}"),
                )),
            );
        }
    };

    let year_label = say
        .academic_year
        .as_ref()
        .map(|y| format!("{} - {}", y.name, y.semester))
        .unwrap_or_default();

    let city = AppConfig::get().report.city_name.clone();

    match build_report_card(
        &school.name,
        &year_label,
        &city,
        &student,
        &subjects,
        &score_rows,
    ) {
        Ok(buffer) => {
            let filename = format!("report_{}.docx", student.nisn);
            Ok(HttpResponse::Ok()
                .content_type(
                    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
                )
                .insert_header((
                    "Content-Disposition",
                    format!("attachment; filename=\"{filename}\""),
                ))
                .body(buffer))
        }
        Err(e) => {
            error!("生成报告书失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ReportGenerationFailed,
                    format!("生成报告书失败: {e}"),
                )),
            )
        }
    }
}

// 双列信息行
fn info_row(label: &str, value: &str) -> TableRow {
    TableRow::new(vec![
        TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(label))),
        TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(value))),
    ])
}

// 表头单元格
fn header_cell(text: &str) -> TableCell {
    TableCell::new().add_paragraph(
        Paragraph::new()
            .align(AlignmentType::Center)
            .add_run(Run::new().add_text(text).bold()),
    )
}

// 普通单元格
fn body_cell(text: &str) -> TableCell {
    TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
}

/// 拼装报告书 docx
fn build_report_card(
    school_name: &str,
    year_label: &str,
    city: &str,
    student: &Student,
    subjects: &[Subject],
    score_rows: &[(String, f64)],
) -> Result<Vec<u8>, String> {
    let averages = average_by_subject(score_rows);

    let mut doc = Docx::new()
        .add_paragraph(
            Paragraph::new()
                .align(AlignmentType::Center)
                .add_run(Run::new().add_text("LAPORAN HASIL BELAJAR").bold().size(32)),
        )
        .add_paragraph(
            Paragraph::new()
                .align(AlignmentType::Center)
                .add_run(Run::new().add_text(school_name).size(24)),
        )
        .add_paragraph(
            Paragraph::new()
                .align(AlignmentType::Center)
                .add_run(Run::new().add_text(year_label)),
        )
        .add_paragraph(Paragraph::new());

    // 身份信息
    let mut identity_rows = vec![
        info_row("Nama", &student.name),
        info_row("NISN", &student.nisn),
        info_row("Jenis Kelamin", &student.gender.to_string()),
    ];
    if let (Some(place), Some(date)) = (&student.birth_place, &student.birth_date) {
        identity_rows.push(info_row("Tempat, Tanggal Lahir", &format!("{place}, {date}")));
    }
    if let Some(ref religion) = student.religion {
        identity_rows.push(info_row("Agama", religion));
    }
    if let Some(ref address) = student.address {
        identity_rows.push(info_row("Alamat", address));
    }
    doc = doc
        .add_table(Table::new(identity_rows))
        .add_paragraph(Paragraph::new());

    // 家长信息，缺失则整块留空
    if let Some(ref parent) = student.parent {
        let mut parent_rows = vec![
            info_row("Nama Ayah", parent.father_name.as_deref().unwrap_or("-")),
            info_row(
                "Pekerjaan Ayah",
                parent.father_occupation.as_deref().unwrap_or("-"),
            ),
            info_row("Nama Ibu", parent.mother_name.as_deref().unwrap_or("-")),
            info_row(
                "Pekerjaan Ibu",
                parent.mother_occupation.as_deref().unwrap_or("-"),
            ),
        ];
        if let Some(ref phone) = parent.phone {
            parent_rows.push(info_row("Telepon", phone));
        }
        doc = doc
            .add_paragraph(
                Paragraph::new().add_run(Run::new().add_text("Orang Tua").bold()),
            )
            .add_table(Table::new(parent_rows))
            .add_paragraph(Paragraph::new());
    }

    // 监护人信息
    if let Some(ref guardian) = student.guardian {
        let guardian_rows = vec![
            info_row("Nama Wali", &guardian.name),
            info_row(
                "Hubungan",
                guardian.relationship.as_deref().unwrap_or("-"),
            ),
            info_row(
                "Pekerjaan",
                guardian.occupation.as_deref().unwrap_or("-"),
            ),
        ];
        doc = doc
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Wali").bold()))
            .add_table(Table::new(guardian_rows))
            .add_paragraph(Paragraph::new());
    }

    // 成绩表：科目、KKM、平均分、判定
    let mut grade_rows = vec![TableRow::new(vec![
        header_cell("No"),
        header_cell("Mata Pelajaran"),
        header_cell("KKM"),
        header_cell("Nilai"),
        header_cell("Keterangan"),
    ])];

    for (index, subject) in subjects.iter().enumerate() {
        let (value, remark) = match averages.get(&subject.id) {
            Some(&average) => {
                let remark = if is_passing(average, subject.passing_grade) {
                    "Tuntas"
                } else {
                    "Belum Tuntas"
                };
                (format!("{average}"), remark)
            }
            // 无成绩的科目留空
            None => ("-".to_string(), "-"),
        };

        grade_rows.push(TableRow::new(vec![
            body_cell(&(index + 1).to_string()),
            body_cell(&subject.name),
            body_cell(&format!("{}", subject.passing_grade)),
            body_cell(&value),
            body_cell(remark),
        ]));
    }

    doc = doc
        .add_paragraph(
            Paragraph::new().add_run(Run::new().add_text("Nilai Sumatif").bold()),
        )
        .add_table(Table::new(grade_rows))
        .add_paragraph(Paragraph::new());

    // 落款
    let date = chrono::Utc::now().format("%Y-%m-%d");
    doc = doc.add_paragraph(
        Paragraph::new()
            .align(AlignmentType::Right)
            .add_run(Run::new().add_text(format!("{city}, {date}"))),
    );

    let mut buffer = std::io::Cursor::new(Vec::new());
    doc.build()
        .pack(&mut buffer)
        .map_err(|e| e.to_string())?;
    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::common::Gender;
    use chrono::Utc;

    fn sample_student() -> Student {
        Student {
            id: "s1".to_string(),
            school_academic_year_id: "say1".to_string(),
            nisn: "0051234567".to_string(),
            name: "Budi Santoso".to_string(),
            gender: Gender::Male,
            birth_place: Some("Bandung".to_string()),
            birth_date: Some("2012-04-01".to_string()),
            religion: None,
            address: None,
            parent: None,
            guardian: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sample_subject(id: &str, name: &str, passing_grade: f64) -> Subject {
        Subject {
            id: id.to_string(),
            school_academic_year_id: "say1".to_string(),
            teacher_id: None,
            teacher_name: None,
            name: name.to_string(),
            code: None,
            passing_grade,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_build_report_card_produces_docx() {
        let subjects = vec![
            sample_subject("math", "Matematika", 70.0),
            sample_subject("sci", "IPA", 70.0),
        ];
        let scores = vec![
            ("math".to_string(), 80.0),
            ("math".to_string(), 90.0),
        ];

        let buffer = build_report_card(
            "SMP Negeri 1",
            "2025/2026 - odd",
            "Bandung",
            &sample_student(),
            &subjects,
            &scores,
        )
        .unwrap();

        // docx 是 zip 容器，检查 PK 魔数
        assert!(buffer.len() > 4);
        assert_eq!(&buffer[0..2], b"PK");
    }

    #[test]
    fn test_build_report_card_without_subjects() {
        let buffer =
            build_report_card("SMP Negeri 1", "", "Bandung", &sample_student(), &[], &[]).unwrap();
        assert_eq!(&buffer[0..2], b"PK");
    }
}
