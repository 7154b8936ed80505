use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SessionService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::{not_found, storage_error};

pub async fn delete_session(
    service: &SessionService,
    request: &HttpRequest,
    session_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_session(session_id).await {
        Ok(true) => {
            info!("课次已删除: id={}", session_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Session deleted successfully")))
        }
        Ok(false) => Ok(not_found(ErrorCode::SessionNotFound, "Session not found")),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::SessionDeleteFailed,
            "Session deletion failed",
        )),
    }
}
