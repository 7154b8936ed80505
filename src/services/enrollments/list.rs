use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::models::{ApiResponse, ErrorCode, enrollments::requests::EnrollmentListQuery};
use crate::services::responses::storage_error;

pub async fn list_enrollments(
    service: &EnrollmentService,
    request: &HttpRequest,
    query: EnrollmentListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_enrollments(query).await {
        Ok(enrollments) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            enrollments,
            "Enrollments retrieved successfully",
        ))),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::InternalServerError,
            "Failed to retrieve enrollments",
        )),
    }
}
