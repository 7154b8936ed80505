use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ProfessorService;
use crate::models::{ApiResponse, ErrorCode, professors::requests::CreateProfessorRequest};
use crate::services::responses::{storage_error, validation_failed};
use crate::utils::validate::validate_professor_name;

pub async fn create_professor(
    service: &ProfessorService,
    request: &HttpRequest,
    professor_data: CreateProfessorRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_professor_name(&professor_data.name) {
        return Ok(validation_failed(msg));
    }

    let storage = service.get_storage(request);

    match storage.create_professor(professor_data).await {
        Ok(professor) => {
            info!("教师已创建: id={}", professor.professor.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                professor,
                "Professor created successfully",
            )))
        }
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::ProfessorCreationFailed,
            "Professor creation failed",
        )),
    }
}
