use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use tracing::warn;

use super::SystemService;
use crate::models::{ApiResponse, AppStartTime, system::responses::HealthResponse};

pub async fn health(service: &SystemService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let config = service.get_config();
    let storage = service.get_storage(request);

    let database_ok = match storage.ping().await {
        Ok(()) => true,
        Err(e) => {
            warn!("数据库健康检查失败: {}", e);
            false
        }
    };

    let now = chrono::Utc::now();
    let started_at = request
        .app_data::<web::Data<AppStartTime>>()
        .map(|t| t.start_datetime)
        .unwrap_or(now);

    let response = HealthResponse {
        status: if database_ok { "ok" } else { "degraded" }.to_string(),
        system_name: config.app.system_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: config.app.environment.clone(),
        database: if database_ok { "ok" } else { "unavailable" }.to_string(),
        started_at,
        uptime_seconds: (now - started_at).num_seconds().max(0),
    };

    if database_ok {
        Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Service is healthy")))
    } else {
        Ok(HttpResponse::ServiceUnavailable()
            .json(ApiResponse::success(response, "Database unavailable")))
    }
}
