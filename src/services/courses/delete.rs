use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CourseService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::{not_found, storage_error};

pub async fn delete_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 仍有课次、选课或考勤记录的课程会被外键拒绝，返回 409
    match storage.delete_course(course_id).await {
        Ok(true) => {
            info!("课程已删除: id={}", course_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Course deleted successfully")))
        }
        Ok(false) => Ok(not_found(ErrorCode::CourseNotFound, "Course not found")),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::CourseDeleteFailed,
            "Course deletion failed",
        )),
    }
}
