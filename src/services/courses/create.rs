use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CourseService;
use crate::models::{ApiResponse, ErrorCode, courses::requests::CreateCourseRequest};
use crate::services::responses::{storage_error, validation_failed};
use crate::utils::validate::validate_course_name;

pub async fn create_course(
    service: &CourseService,
    request: &HttpRequest,
    course_data: CreateCourseRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_course_name(&course_data.course_name) {
        return Ok(validation_failed(msg));
    }

    let storage = service.get_storage(request);

    // 教师不存在时存储层返回 Validation
    match storage.create_course(course_data).await {
        Ok(course) => {
            info!(
                "课程已创建: id={} professor={}",
                course.course.id, course.course.professor_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                course,
                "Course created successfully",
            )))
        }
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::CourseCreationFailed,
            "Course creation failed",
        )),
    }
}
