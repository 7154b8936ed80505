use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AttendanceService;
use crate::models::{ApiResponse, ErrorCode, attendance::requests::UpdateAttendanceRequest};
use crate::services::responses::{not_found, storage_error};

pub async fn update_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    attendance_id: i64,
    update_data: UpdateAttendanceRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_attendance(attendance_id, update_data).await {
        Ok(Some(record)) => {
            info!("考勤已更新: id={}", attendance_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                record,
                "Attendance updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(
            ErrorCode::AttendanceNotFound,
            "Attendance record not found",
        )),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::AttendanceUpdateFailed,
            "Attendance update failed",
        )),
    }
}
