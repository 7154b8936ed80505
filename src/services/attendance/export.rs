//! 课程出勤表导出
//!
//! 生成单个工作表：首行为表头，其后每名学生一行，出勤单元格为 Yes / No。

use actix_web::http::header::{
    Charset, ContentDisposition, DispositionParam, DispositionType, ExtendedValue,
};
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tracing::{error, info};

use super::AttendanceService;
use crate::errors::LedgerError;
use crate::models::{ApiResponse, ErrorCode, attendance::report::AttendanceReport};
use crate::services::responses::{not_found, storage_error};

const XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub async fn export_course_report(
    service: &AttendanceService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let report = match storage.get_attendance_report(course_id).await {
        Ok(Some(report)) => report,
        Ok(None) => return Ok(not_found(ErrorCode::CourseNotFound, "Course not found")),
        Err(e) => {
            return Ok(storage_error(
                e,
                ErrorCode::AttendanceReportFailed,
                "Failed to build attendance report",
            ));
        }
    };

    let buffer = match render_report_xlsx(&report) {
        Ok(buffer) => buffer,
        Err(e) => {
            error!("生成出勤表失败: course={} err={}", course_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::AttendanceReportFailed,
                    "Failed to export attendance report",
                )),
            );
        }
    };

    let disposition = attachment_disposition(&report.export_filename());
    info!(
        "出勤表已导出: course={} students={} sessions={}",
        course_id, report.total_students, report.total_sessions
    );

    Ok(HttpResponse::Ok()
        .content_type(XLSX_CONTENT_TYPE)
        .insert_header(disposition)
        .body(buffer))
}

/// 附件文件名：`filename` 只放 ASCII 回退名，
/// 含非 ASCII 字符时另加 RFC 5987 的 `filename*=UTF-8''...`
fn attachment_disposition(name: &str) -> ContentDisposition {
    let fallback: String = name
        .chars()
        .filter(|c| !c.is_control() && *c != '"' && *c != '\\')
        .map(|c| if c.is_ascii() { c } else { '_' })
        .collect();

    let mut parameters = vec![DispositionParam::Filename(fallback)];
    if !name.is_ascii() {
        parameters.push(DispositionParam::FilenameExt(ExtendedValue {
            charset: Charset::Ext("UTF-8".to_string()),
            language_tag: None,
            value: name.as_bytes().to_vec(),
        }));
    }

    ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters,
    }
}

pub(crate) fn render_report_xlsx(report: &AttendanceReport) -> Result<Vec<u8>, LedgerError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let sheet = workbook.add_worksheet().set_name("Attendance")?;
    write_attendance_sheet(sheet, &header_format, report)?;

    Ok(workbook.save_to_buffer()?)
}

fn write_attendance_sheet(
    sheet: &mut Worksheet,
    header_format: &Format,
    report: &AttendanceReport,
) -> Result<(), LedgerError> {
    for (col, header) in report.column_headers().iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, header, header_format)?;
    }

    for (idx, row) in report.rows.iter().enumerate() {
        let line = (idx + 1) as u32;
        sheet.write_string(line, 0, &row.student.student_name)?;
        sheet.write_string(line, 1, &row.student.academic_number)?;

        for (offset, cell) in row.cells.iter().enumerate() {
            sheet.write_string(line, (offset + 2) as u16, cell.label())?;
        }
    }

    sheet.set_column_width(0, 24)?;
    sheet.set_column_width(1, 18)?;
    for offset in 0..report.sessions.len() {
        sheet.set_column_width((offset + 2) as u16, 20)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attendance::entities::Attendance;
    use crate::models::courses::entities::Course;
    use crate::models::sessions::entities::CourseSession;
    use crate::models::students::entities::Student;
    use chrono::{NaiveDate, Utc};

    fn sample_report() -> AttendanceReport {
        let now = Utc::now();
        let course = Course {
            id: 1,
            course_name: "CS101".to_string(),
            professor_id: 1,
            created_at: now,
            updated_at: now,
        };
        let session = CourseSession {
            id: 1,
            course_id: 1,
            session_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            start_time: None,
            end_time: None,
            topic: None,
            created_at: now,
            updated_at: now,
        };
        let student = Student {
            id: 1,
            academic_number: "S0000001".to_string(),
            student_name: "Alice Doe".to_string(),
            created_at: now,
            updated_at: now,
        };
        let record = Attendance {
            id: 1,
            student_id: 1,
            course_id: 1,
            session_id: 1,
            is_present: true,
            created_at: now,
            updated_at: now,
        };
        AttendanceReport::build(course, vec![session], vec![student], &[record])
    }

    #[test]
    fn test_rendered_workbook_is_zip_container() {
        let buffer = render_report_xlsx(&sample_report()).unwrap();
        assert!(buffer.len() > 4);
        assert_eq!(&buffer[..2], b"PK");
    }

    #[test]
    fn test_attachment_filename_strips_quotes() {
        let header = attachment_disposition("My \"Course\"_Attendance.xlsx").to_string();
        assert!(header.starts_with("attachment"));
        assert!(header.contains("filename=\"My Course_Attendance.xlsx\""));
        assert!(!header.contains("filename*"));
    }

    #[test]
    fn test_non_ascii_filename_is_percent_encoded() {
        // 课程 = E8 AF BE / E7 A8 8B
        let header = attachment_disposition("课程_Attendance.xlsx").to_string();
        assert!(header.contains("filename=\"___Attendance.xlsx\""));
        assert!(header.contains("filename*=UTF-8''%E8%AF%BE%E7%A8%8B_Attendance.xlsx"));
        assert!(header.is_ascii());
    }
}
