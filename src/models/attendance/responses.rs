use serde::Serialize;
use ts_rs::TS;

// 签到二维码令牌响应，前端自行渲染为二维码图片
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct QrTokenResponse {
    pub token: String,
    pub session_id: i64,
    pub course_id: i64,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}
