use serde::Deserialize;
use ts_rs::TS;

// 创建课程请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CreateCourseRequest {
    pub course_name: String,
    pub professor_id: i64,
}

// 更新课程请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct UpdateCourseRequest {
    pub course_name: Option<String>,
    pub professor_id: Option<i64>,
}
