use crate::models::common::serde_helpers::{
    deserialize_optional_session_date, deserialize_session_date,
};
use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

// 创建课次请求
//
// 通过 /courses/{id}/sessions 创建时 course_id 取自路径，可省略
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/session.ts")]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub course_id: Option<i64>,
    #[serde(deserialize_with = "deserialize_session_date")]
    #[ts(type = "string")]
    pub session_date: NaiveDate,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
}

// 更新课次请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/session.ts")]
pub struct UpdateSessionRequest {
    pub course_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_session_date")]
    #[ts(type = "string | null")]
    pub session_date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub topic: Option<String>,
}

// 课次列表查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/session.ts")]
pub struct SessionListQuery {
    pub course_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_accepts_iso_timestamp_date() {
        let req: CreateSessionRequest = serde_json::from_str(
            r#"{"courseId": 3, "sessionDate": "2024-02-01T00:00:00.000Z", "startTime": "09:00"}"#,
        )
        .unwrap();
        assert_eq!(req.course_id, Some(3));
        assert_eq!(req.session_date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(req.start_time.as_deref(), Some("09:00"));
        assert!(req.topic.is_none());
    }

    #[test]
    fn test_update_request_without_date_keeps_none() {
        let req: UpdateSessionRequest = serde_json::from_str(r#"{"topic": "Recursion"}"#).unwrap();
        assert!(req.session_date.is_none());
        assert_eq!(req.topic.as_deref(), Some("Recursion"));
    }
}
