use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::EnrollmentService;
use crate::errors::LedgerError;
use crate::models::{ApiResponse, ErrorCode, enrollments::requests::CreateEnrollmentRequest};
use crate::services::responses::storage_error;

pub async fn create_enrollment(
    service: &EnrollmentService,
    request: &HttpRequest,
    enrollment_data: CreateEnrollmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.create_enrollment(enrollment_data).await {
        Ok(enrollment) => {
            info!(
                "选课记录已创建: student={} course={}",
                enrollment.enrollment.student_id, enrollment.enrollment.course_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                enrollment,
                "Enrollment created successfully",
            )))
        }
        Err(LedgerError::Conflict(_)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(
                ErrorCode::Conflict,
                "Student is already enrolled in this course",
            ),
        )),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::EnrollmentCreationFailed,
            "Enrollment creation failed",
        )),
    }
}
