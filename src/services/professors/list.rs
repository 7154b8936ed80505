use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProfessorService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::storage_error;

pub async fn list_professors(
    service: &ProfessorService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_professors().await {
        Ok(professors) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            professors,
            "Professors retrieved successfully",
        ))),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::InternalServerError,
            "Failed to retrieve professors",
        )),
    }
}
