use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AttendanceService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::{not_found, storage_error};

pub async fn delete_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    attendance_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_attendance(attendance_id).await {
        Ok(true) => {
            info!("考勤已删除: id={}", attendance_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Attendance deleted successfully",
            )))
        }
        Ok(false) => Ok(not_found(
            ErrorCode::AttendanceNotFound,
            "Attendance record not found",
        )),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::AttendanceDeleteFailed,
            "Attendance deletion failed",
        )),
    }
}
