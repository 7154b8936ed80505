use crate::models::attendance::entities::Attendance;
use crate::models::enrollments::entities::Enrollment;
use crate::models::professors::entities::Professor;
use crate::models::sessions::entities::CourseSession;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程实体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct Course {
    pub id: i64,
    pub course_name: String,
    pub professor_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 课程详情
//
// 教师删除受外键约束，正常情况下 professor 总是存在；
// 保留 Option 以便在数据被外部修改时仍能返回课程本身。
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub course: Course,
    pub professor: Option<Professor>,
    pub sessions: Vec<CourseSession>,
    pub enrollments: Vec<Enrollment>,
    pub attendance: Vec<Attendance>,
}
