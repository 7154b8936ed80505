use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AttendanceService;
use crate::models::{ApiResponse, ErrorCode, attendance::requests::MarkAttendanceRequest};
use crate::services::responses::storage_error;

pub async fn mark_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    attendance_data: MarkAttendanceRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 课次不存在或 courseId 不一致时存储层返回 Validation
    match storage.mark_attendance(attendance_data).await {
        Ok(record) => {
            info!(
                "考勤已登记: student={} session={} present={}",
                record.attendance.student_id,
                record.attendance.session_id,
                record.attendance.is_present
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                record,
                "Attendance recorded successfully",
            )))
        }
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::AttendanceMarkFailed,
            "Attendance recording failed",
        )),
    }
}
