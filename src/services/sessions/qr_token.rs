//! 签到二维码令牌签发
//!
//! 只返回令牌字符串与过期时间，二维码图片由前端渲染。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SessionService;
use crate::models::{ApiResponse, ErrorCode, attendance::responses::QrTokenResponse};
use crate::services::responses::{not_found, storage_error};
use crate::utils::QrTokenUtils;

pub async fn issue_qr_token(
    service: &SessionService,
    request: &HttpRequest,
    session_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let session = match storage.get_session_by_id(session_id).await {
        Ok(Some(detail)) => detail.session,
        Ok(None) => return Ok(not_found(ErrorCode::SessionNotFound, "Session not found")),
        Err(e) => {
            return Ok(storage_error(
                e,
                ErrorCode::InternalServerError,
                "Failed to retrieve session",
            ));
        }
    };

    match QrTokenUtils::issue(session.id, session.course_id) {
        Ok(issued) => {
            info!(
                "签到令牌已签发: session={} expires_at={}",
                session.id, issued.expires_at
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                QrTokenResponse {
                    token: issued.token,
                    session_id: session.id,
                    course_id: session.course_id,
                    expires_at: issued.expires_at,
                },
                "QR token issued successfully",
            )))
        }
        Err(e) => {
            error!("签到令牌签发失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to issue QR token",
                )),
            )
        }
    }
}
