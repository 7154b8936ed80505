use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SessionService;
use crate::models::{ApiResponse, ErrorCode, sessions::requests::UpdateSessionRequest};
use crate::services::responses::{not_found, storage_error, validation_failed};
use crate::utils::validate::validate_session_times;

pub async fn update_session(
    service: &SessionService,
    request: &HttpRequest,
    session_id: i64,
    update_data: UpdateSessionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 时间段需结合已有值校验
    let existing = match storage.get_session_by_id(session_id).await {
        Ok(Some(detail)) => detail.session,
        Ok(None) => return Ok(not_found(ErrorCode::SessionNotFound, "Session not found")),
        Err(e) => {
            return Ok(storage_error(
                e,
                ErrorCode::InternalServerError,
                "Failed to retrieve session",
            ));
        }
    };

    let start_time = update_data.start_time.as_deref().or(existing.start_time.as_deref());
    let end_time = update_data.end_time.as_deref().or(existing.end_time.as_deref());
    if let Err(msg) = validate_session_times(start_time, end_time) {
        return Ok(validation_failed(msg));
    }

    match storage.update_session(session_id, update_data).await {
        Ok(Some(session)) => {
            info!("课次已更新: id={}", session_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                session,
                "Session updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::SessionNotFound, "Session not found")),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::SessionUpdateFailed,
            "Session update failed",
        )),
    }
}
