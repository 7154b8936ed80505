use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::sessions::requests::{
    CreateSessionRequest, SessionListQuery, UpdateSessionRequest,
};
use crate::services::SessionService;
use crate::utils::SafeIDI64;

static SESSION_SERVICE: Lazy<SessionService> = Lazy::new(SessionService::new_lazy);

pub async fn list_sessions(
    req: HttpRequest,
    query: web::Query<SessionListQuery>,
) -> ActixResult<HttpResponse> {
    SESSION_SERVICE
        .list_sessions(&req, query.into_inner())
        .await
}

pub async fn create_session(
    req: HttpRequest,
    session_data: web::Json<CreateSessionRequest>,
) -> ActixResult<HttpResponse> {
    SESSION_SERVICE
        .create_session(&req, None, session_data.into_inner())
        .await
}

pub async fn get_session(req: HttpRequest, session_id: SafeIDI64) -> ActixResult<HttpResponse> {
    SESSION_SERVICE.get_session(&req, session_id.0).await
}

pub async fn update_session(
    req: HttpRequest,
    session_id: SafeIDI64,
    update_data: web::Json<UpdateSessionRequest>,
) -> ActixResult<HttpResponse> {
    SESSION_SERVICE
        .update_session(&req, session_id.0, update_data.into_inner())
        .await
}

pub async fn delete_session(req: HttpRequest, session_id: SafeIDI64) -> ActixResult<HttpResponse> {
    SESSION_SERVICE.delete_session(&req, session_id.0).await
}

// 签到二维码
pub async fn issue_qr_token(req: HttpRequest, session_id: SafeIDI64) -> ActixResult<HttpResponse> {
    SESSION_SERVICE.issue_qr_token(&req, session_id.0).await
}

pub fn configure_session_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/sessions")
            .route("", web::get().to(list_sessions))
            .route("", web::post().to(create_session))
            .route("/{id}", web::get().to(get_session))
            .route("/{id}", web::put().to(update_session))
            .route("/{id}", web::delete().to(delete_session))
            .route("/{id}/qr-token", web::post().to(issue_qr_token)),
    );
}
