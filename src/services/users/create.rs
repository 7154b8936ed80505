use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::UserService;
use crate::errors::LedgerError;
use crate::models::{ApiResponse, ErrorCode, users::requests::CreateUserRequest};
use crate::services::responses::{storage_error, validation_failed};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_password, validate_user_name};

pub async fn create_user(
    service: &UserService,
    mut user_data: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 验证用户名
    if let Err(msg) = validate_user_name(&user_data.user_name) {
        return Ok(validation_failed(msg));
    }

    // 验证密码
    if let Err(msg) = validate_password(&user_data.password) {
        return Ok(validation_failed(msg));
    }

    user_data.password = match hash_password(&user_data.password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(storage_error(
                e,
                ErrorCode::UserCreationFailed,
                "Password hashing failed",
            ));
        }
    };

    let storage = service.get_storage(request);

    match storage.create_user(user_data).await {
        Ok(created) => {
            info!(
                "用户已创建: id={} type={}",
                created.user.id, created.user.user_type
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(created, "User created successfully")))
        }
        // 用户名唯一约束冲突
        Err(LedgerError::Conflict(_)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::UserAlreadyExists, "User name already exists"),
        )),
        Err(e) => Ok(storage_error(
            e,
            ErrorCode::UserCreationFailed,
            "User creation failed",
        )),
    }
}
