use serde::Serialize;
use ts_rs::TS;

/// 健康检查响应
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct HealthResponse {
    pub status: String,
    pub system_name: String,
    pub version: String,
    pub environment: String,
    pub database: String, // 数据库连通状态：ok / unavailable
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub uptime_seconds: i64,
}
