use serde::Deserialize;
use ts_rs::TS;

// 创建选课请求，enrollment_date 缺省为当前时间
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct CreateEnrollmentRequest {
    pub student_id: i64,
    pub course_id: i64,
    #[serde(default)]
    pub enrollment_date: Option<chrono::DateTime<chrono::Utc>>,
}

// 更新选课请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct UpdateEnrollmentRequest {
    pub student_id: Option<i64>,
    pub course_id: Option<i64>,
    pub enrollment_date: Option<chrono::DateTime<chrono::Utc>>,
}

// 选课列表查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollmentListQuery {
    pub course_id: Option<i64>,
    pub student_id: Option<i64>,
}
