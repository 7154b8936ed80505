use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::errors::LedgerError;
use crate::models::{ApiResponse, ErrorCode, students::requests::UpdateStudentRequest};
use crate::services::responses::{not_found, storage_error, validation_failed};
use crate::utils::validate::{validate_academic_number, validate_student_name};

pub async fn update_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
    mut update_data: UpdateStudentRequest,
) -> ActixResult<HttpResponse> {
    if let Some(academic_number) = update_data.academic_number.take() {
        let academic_number = academic_number.trim().to_string();
        if let Err(msg) = validate_academic_number(&academic_number) {
            return Ok(validation_failed(msg));
        }
        update_data.academic_number = Some(academic_number);
    }

    if let Some(ref student_name) = update_data.student_name
        && let Err(msg) = validate_student_name(student_name)
    {
        return Ok(validation_failed(msg));
    }

    let storage = service.get_storage(request);

    match storage.update_student(student_id, update_data).await {
        Ok(Some(student)) => {
            info!("学生已更新: id={}", student_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                student,
                "Student updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::StudentNotFound, "Student not found")),
        Err(LedgerError::Conflict(_)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(
                ErrorCode::StudentAlreadyExists,
                "Academic number already exists",
            ),
        )),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::StudentUpdateFailed,
            "Student update failed",
        )),
    }
}
