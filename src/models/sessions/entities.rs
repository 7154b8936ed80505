use crate::models::attendance::entities::Attendance;
use crate::models::courses::entities::Course;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课次实体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/session.ts")]
pub struct CourseSession {
    pub id: i64,
    pub course_id: i64,
    pub session_date: NaiveDate,
    pub start_time: Option<String>, // HH:MM
    pub end_time: Option<String>,   // HH:MM
    pub topic: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 课次详情（附带所属课程与考勤记录）
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/session.ts")]
pub struct SessionDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub session: CourseSession,
    pub course: Option<Course>,
    pub attendance: Vec<Attendance>,
}
