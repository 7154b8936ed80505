use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CourseService;
use crate::models::{ApiResponse, ErrorCode, courses::requests::UpdateCourseRequest};
use crate::services::responses::{not_found, storage_error, validation_failed};
use crate::utils::validate::validate_course_name;

pub async fn update_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
    update_data: UpdateCourseRequest,
) -> ActixResult<HttpResponse> {
    if let Some(ref course_name) = update_data.course_name
        && let Err(msg) = validate_course_name(course_name)
    {
        return Ok(validation_failed(msg));
    }

    let storage = service.get_storage(request);

    match storage.update_course(course_id, update_data).await {
        Ok(Some(course)) => {
            info!("课程已更新: id={}", course_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                course,
                "Course updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::CourseNotFound, "Course not found")),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::CourseUpdateFailed,
            "Course update failed",
        )),
    }
}
