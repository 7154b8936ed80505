use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SessionService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::{not_found, storage_error};

pub async fn get_session(
    service: &SessionService,
    request: &HttpRequest,
    session_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_session_by_id(session_id).await {
        Ok(Some(session)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            session,
            "Session retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::SessionNotFound, "Session not found")),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::InternalServerError,
            "Failed to retrieve session",
        )),
    }
}
