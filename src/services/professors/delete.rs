use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ProfessorService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::{not_found, storage_error};

pub async fn delete_professor(
    service: &ProfessorService,
    request: &HttpRequest,
    professor_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 仍有课程的教师会被外键拒绝，返回 409
    match storage.delete_professor(professor_id).await {
        Ok(true) => {
            info!("教师已删除: id={}", professor_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Professor deleted successfully")))
        }
        Ok(false) => Ok(not_found(ErrorCode::ProfessorNotFound, "Professor not found")),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::ProfessorDeleteFailed,
            "Professor deletion failed",
        )),
    }
}
