use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::UserService;
use crate::errors::LedgerError;
use crate::models::{ApiResponse, ErrorCode, users::requests::UpdateUserRequest};
use crate::services::responses::{not_found, storage_error, validation_failed};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_password, validate_user_name};

pub async fn update_user(
    service: &UserService,
    user_id: i64,
    mut update_data: UpdateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(ref user_name) = update_data.user_name
        && let Err(msg) = validate_user_name(user_name)
    {
        return Ok(validation_failed(msg));
    }

    // 新密码先校验再哈希
    if let Some(password) = update_data.password.take() {
        if let Err(msg) = validate_password(&password) {
            return Ok(validation_failed(msg));
        }
        match hash_password(&password) {
            Ok(hash) => update_data.password = Some(hash),
            Err(e) => {
                return Ok(storage_error(
                    e,
                    ErrorCode::UserUpdateFailed,
                    "Password hashing failed",
                ));
            }
        }
    }

    let storage = service.get_storage(request);

    match storage.update_user(user_id, update_data).await {
        Ok(Some(user)) => {
            info!("用户已更新: id={}", user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                user,
                "User information updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::UserNotFound, "User not found")),
        Err(LedgerError::Conflict(_)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::UserAlreadyExists, "User name already exists"),
        )),
        Err(e) => Ok(storage_error(e, ErrorCode::UserUpdateFailed, "User update failed")),
    }
}
