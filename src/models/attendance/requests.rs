use serde::Deserialize;
use ts_rs::TS;

// 登记考勤请求
//
// course_id 由课次推导；若提供则必须与课次所属课程一致
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct MarkAttendanceRequest {
    pub student_id: i64,
    pub session_id: i64,
    #[serde(default)]
    pub course_id: Option<i64>,
    pub is_present: bool,
}

// 更新考勤请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct UpdateAttendanceRequest {
    pub student_id: Option<i64>,
    pub session_id: Option<i64>,
    pub course_id: Option<i64>,
    pub is_present: Option<bool>,
}

// 考勤列表查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceListQuery {
    pub course_id: Option<i64>,
    pub student_id: Option<i64>,
    pub session_id: Option<i64>,
}

// 扫码签到请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct CheckInRequest {
    pub token: String,
    pub student_id: i64,
}
