use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProfessorService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::{not_found, storage_error};

pub async fn get_professor(
    service: &ProfessorService,
    request: &HttpRequest,
    professor_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_professor_by_id(professor_id).await {
        Ok(Some(professor)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            professor,
            "Professor retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::ProfessorNotFound, "Professor not found")),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::InternalServerError,
            "Failed to retrieve professor",
        )),
    }
}
