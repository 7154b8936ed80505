use crate::models::courses::entities::Course;
use crate::models::sessions::entities::CourseSession;
use crate::models::students::entities::Student;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 考勤记录，每个 (student_id, session_id) 至多一条
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct Attendance {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub session_id: i64,
    pub is_present: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 考勤详情（附带学生、课程与课次）
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub attendance: Attendance,
    pub student: Option<Student>,
    pub course: Option<Course>,
    pub session: Option<CourseSession>,
}
