use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::{not_found, storage_error};

pub async fn get_course_report(
    service: &AttendanceService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_attendance_report(course_id).await {
        Ok(Some(report)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            report,
            "Attendance report generated successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::CourseNotFound, "Course not found")),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::AttendanceReportFailed,
            "Failed to build attendance report",
        )),
    }
}
