//! 存储层错误到 HTTP 响应的映射

use actix_web::HttpResponse;
use tracing::{error, warn};

use crate::errors::LedgerError;
use crate::models::{ApiResponse, ErrorCode};

// 参数校验失败
pub(crate) fn validation_failed(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::ValidationFailed, message))
}

// 约束冲突时统一返回的消息，驱动细节只写日志
pub(crate) const CONFLICT_MESSAGE: &str = "Request conflicts with existing records";

// 资源不存在
pub(crate) fn not_found(code: ErrorCode, message: &'static str) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(code, message))
}

/// 存储层错误 → HTTP 响应
///
/// Validation → 400，NotFound → 404，Conflict → 409；
/// Conflict 与其余错误都只在日志中保留细节，响应体使用固定消息。
pub(crate) fn storage_error(err: LedgerError, failure: ErrorCode, context: &'static str) -> HttpResponse {
    match err {
        LedgerError::Validation(msg) => validation_failed(msg),
        LedgerError::NotFound(msg) => {
            HttpResponse::NotFound().json(ApiResponse::error_empty(ErrorCode::NotFound, msg))
        }
        LedgerError::Conflict(msg) => {
            warn!("{}: {}", context, msg);
            HttpResponse::Conflict().json(ApiResponse::error_empty(ErrorCode::Conflict, CONFLICT_MESSAGE))
        }
        other => {
            error!("{}: {}", context, other);
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(failure, context))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (LedgerError::validation("bad"), StatusCode::BAD_REQUEST),
            (LedgerError::not_found("gone"), StatusCode::NOT_FOUND),
            (LedgerError::conflict("dup"), StatusCode::CONFLICT),
            (
                LedgerError::database_operation("disk"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (LedgerError::export("xlsx"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            let resp = storage_error(err, ErrorCode::InternalServerError, "Operation failed");
            assert_eq!(resp.status(), status);
        }
    }

    #[actix_web::test]
    async fn test_conflict_body_hides_driver_detail() {
        let err = LedgerError::conflict("删除教师失败: related record constraint (FOREIGN KEY constraint failed)");
        let resp = storage_error(err, ErrorCode::ProfessorDeleteFailed, "Professor deletion failed");
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["code"], ErrorCode::Conflict as i32);
        assert_eq!(body["message"], CONFLICT_MESSAGE);
        assert!(!body.to_string().contains("FOREIGN KEY"));
    }
}
