use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SessionService;
use crate::models::{ApiResponse, ErrorCode, sessions::requests::CreateSessionRequest};
use crate::services::responses::{storage_error, validation_failed};
use crate::utils::validate::validate_session_times;

pub async fn create_session(
    service: &SessionService,
    request: &HttpRequest,
    path_course_id: Option<i64>,
    session_data: CreateSessionRequest,
) -> ActixResult<HttpResponse> {
    // 路径中的课程优先；请求体中的 courseId 若同时给出必须一致
    let course_id = match (path_course_id, session_data.course_id) {
        (Some(path_id), Some(body_id)) if path_id != body_id => {
            return Ok(validation_failed(format!(
                "courseId {body_id} does not match the course in the path ({path_id})"
            )));
        }
        (Some(path_id), _) => path_id,
        (None, Some(body_id)) => body_id,
        (None, None) => return Ok(validation_failed("courseId is required")),
    };

    if let Err(msg) = validate_session_times(
        session_data.start_time.as_deref(),
        session_data.end_time.as_deref(),
    ) {
        return Ok(validation_failed(msg));
    }

    let storage = service.get_storage(request);

    match storage.create_session(course_id, session_data).await {
        Ok(session) => {
            info!(
                "课次已创建: id={} course={} date={}",
                session.session.id, course_id, session.session.session_date
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                session,
                "Session created successfully",
            )))
        }
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::SessionCreationFailed,
            "Session creation failed",
        )),
    }
}
