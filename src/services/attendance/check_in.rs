//! 扫码签到
//!
//! 令牌中携带课次与课程，校验通过后为该学生登记出勤。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::AttendanceService;
use crate::models::{
    ApiResponse, ErrorCode,
    attendance::requests::{CheckInRequest, MarkAttendanceRequest},
};
use crate::services::responses::storage_error;
use crate::utils::QrTokenUtils;

pub async fn check_in(
    service: &AttendanceService,
    request: &HttpRequest,
    check_in_data: CheckInRequest,
) -> ActixResult<HttpResponse> {
    let claims = match QrTokenUtils::verify(check_in_data.token.trim()) {
        Ok(claims) => claims,
        Err(e) => {
            warn!("签到令牌无效: student={} err={}", check_in_data.student_id, e);
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::AttendanceTokenInvalid,
                "Invalid or expired attendance token",
            )));
        }
    };

    let storage = service.get_storage(request);

    let mark = MarkAttendanceRequest {
        student_id: check_in_data.student_id,
        session_id: claims.sid,
        course_id: Some(claims.cid),
        is_present: true,
    };

    match storage.mark_attendance(mark).await {
        Ok(record) => {
            info!(
                "扫码签到成功: student={} session={}",
                record.attendance.student_id, record.attendance.session_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(record, "Checked in successfully")))
        }
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::AttendanceMarkFailed,
            "Check-in failed",
        )),
    }
}
