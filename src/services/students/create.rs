use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::errors::LedgerError;
use crate::models::{ApiResponse, ErrorCode, students::requests::CreateStudentRequest};
use crate::services::responses::{storage_error, validation_failed};
use crate::utils::validate::{validate_academic_number, validate_student_name};

pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    mut student_data: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    student_data.academic_number = student_data.academic_number.trim().to_string();

    if let Err(msg) = validate_academic_number(&student_data.academic_number) {
        return Ok(validation_failed(msg));
    }

    if let Err(msg) = validate_student_name(&student_data.student_name) {
        return Ok(validation_failed(msg));
    }

    let storage = service.get_storage(request);

    match storage.create_student(student_data).await {
        Ok(student) => {
            info!("学生已创建: id={}", student.student.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                student,
                "Student created successfully",
            )))
        }
        // 学号唯一约束冲突
        Err(LedgerError::Conflict(_)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(
                ErrorCode::StudentAlreadyExists,
                "Academic number already exists",
            ),
        )),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::StudentCreationFailed,
            "Student creation failed",
        )),
    }
}
