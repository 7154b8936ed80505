use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SessionService;
use crate::models::{ApiResponse, ErrorCode, sessions::requests::SessionListQuery};
use crate::services::responses::{not_found, storage_error};

pub async fn list_sessions(
    service: &SessionService,
    request: &HttpRequest,
    query: SessionListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 按课程筛选时，课程本身不存在返回 404 而不是空列表
    if let Some(course_id) = query.course_id {
        match storage.get_course_by_id(course_id).await {
            Ok(Some(_)) => {}
            Ok(None) => return Ok(not_found(ErrorCode::CourseNotFound, "Course not found")),
            Err(e) => {
                return Ok(storage_error(
                    e,
                    ErrorCode::InternalServerError,
                    "Failed to retrieve course",
                ));
            }
        }
    }

    match storage.list_sessions(query).await {
        Ok(sessions) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            sessions,
            "Sessions retrieved successfully",
        ))),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::InternalServerError,
            "Failed to retrieve sessions",
        )),
    }
}
