use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ProfessorService;
use crate::models::{ApiResponse, ErrorCode, professors::requests::UpdateProfessorRequest};
use crate::services::responses::{not_found, storage_error, validation_failed};
use crate::utils::validate::validate_professor_name;

pub async fn update_professor(
    service: &ProfessorService,
    request: &HttpRequest,
    professor_id: i64,
    update_data: UpdateProfessorRequest,
) -> ActixResult<HttpResponse> {
    if let Some(ref name) = update_data.name
        && let Err(msg) = validate_professor_name(name)
    {
        return Ok(validation_failed(msg));
    }

    let storage = service.get_storage(request);

    match storage.update_professor(professor_id, update_data).await {
        Ok(Some(professor)) => {
            info!("教师已更新: id={}", professor_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                professor,
                "Professor updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::ProfessorNotFound, "Professor not found")),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::ProfessorUpdateFailed,
            "Professor update failed",
        )),
    }
}
