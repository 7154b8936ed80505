use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::EnrollmentService;
use crate::models::{ApiResponse, ErrorCode, enrollments::requests::UpdateEnrollmentRequest};
use crate::services::responses::{not_found, storage_error};

pub async fn update_enrollment(
    service: &EnrollmentService,
    request: &HttpRequest,
    enrollment_id: i64,
    update_data: UpdateEnrollmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_enrollment(enrollment_id, update_data).await {
        Ok(Some(enrollment)) => {
            info!("选课记录已更新: id={}", enrollment_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                enrollment,
                "Enrollment updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::EnrollmentNotFound, "Enrollment not found")),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::EnrollmentUpdateFailed,
            "Enrollment update failed",
        )),
    }
}
